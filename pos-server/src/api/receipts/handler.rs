//! Receipt API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use shared::models::ReceiptRequest;

use crate::api::extract::json_body;
use crate::core::ServerState;
use crate::utils::validation::is_valid_email;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct SendReceiptResponse {
    success: bool,
    message: String,
}

/// POST /api/send-receipt - 发送小票邮件
pub async fn send_receipt(
    State(state): State<ServerState>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> AppResult<Json<SendReceiptResponse>> {
    let request = json_body(payload)?;

    let email = request.email.as_deref().map(str::trim).unwrap_or_default();
    let order = match request.order.as_ref() {
        Some(order) if !email.is_empty() => order,
        _ => {
            return Err(AppError::invalid_request("Email and order data required"));
        }
    };
    if !is_valid_email(email) {
        return Err(AppError::with_message(
            ErrorCode::InvalidEmail,
            "Invalid email format",
        ));
    }

    state
        .mailer
        .send_receipt(email, order)
        .await
        .map_err(|e| AppError::with_message(ErrorCode::ReceiptDeliveryFailed, e.to_string()))?;

    Ok(Json(SendReceiptResponse {
        success: true,
        message: format!("Receipt sent to {email}"),
    }))
}
