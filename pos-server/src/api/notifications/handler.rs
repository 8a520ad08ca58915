//! Notification API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{Notification, NotificationCreate};

use crate::api::extract::json_body;
use crate::core::ServerState;
use crate::db::repository::notification;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    message: &'static str,
    updated: u64,
}

/// GET /api/notifications - 最近 50 条
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Notification>>> {
    let list = notification::find_recent(state.pool(), notification::LIST_LIMIT).await?;
    Ok(Json(list))
}

/// POST /api/notifications
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NotificationCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let data = json_body(payload)?;
    let invalid = |e: AppError| AppError::with_message(ErrorCode::NotificationInvalid, e.message);

    let title = data.title.unwrap_or_default();
    let message = data.message.unwrap_or_default();
    validate_required_text(&title, "title", MAX_NAME_LEN).map_err(invalid)?;
    validate_required_text(&message, "message", MAX_NOTE_LEN).map_err(invalid)?;

    let created = notification::create(
        state.pool(),
        &title,
        &message,
        data.kind.unwrap_or_default(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/notifications - 全部标记为已读
pub async fn mark_all_read(State(state): State<ServerState>) -> AppResult<Json<MarkReadResponse>> {
    let updated = notification::mark_all_read(state.pool()).await?;
    Ok(Json(MarkReadResponse {
        message: "All notifications marked as read",
        updated,
    }))
}
