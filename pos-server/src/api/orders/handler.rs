//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{Order, OrderCreate};

use crate::api::extract::json_body;
use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /api/orders - 取号并创建订单
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let raw = json_body(payload)?;
    let order = state.issuer.issue(raw).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders - 全部订单 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(state.pool()).await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 单个订单 (小票页)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = order::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
                .with_detail("id", id.clone())
        })?;
    Ok(Json(order))
}
