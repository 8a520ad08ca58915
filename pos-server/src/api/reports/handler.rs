//! Report API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Local;
use shared::models::{ReportPeriod, SalesReport};

use crate::core::ServerState;
use crate::reports;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/reports/:period - daily | weekly | monthly (服务器本地时区)
pub async fn get_report(
    State(state): State<ServerState>,
    Path(period): Path<String>,
) -> AppResult<Json<SalesReport>> {
    let period: ReportPeriod = period.parse().map_err(|e| {
        AppError::with_message(ErrorCode::UnknownReportPeriod, format!("{e}"))
            .with_detail("period", period.clone())
    })?;

    let report = reports::generate(state.pool(), period, &Local::now()).await?;
    Ok(Json(report))
}
