//! Request body helpers
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so that malformed bodies
//! come back in the standard error envelope instead of axum's plain text.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::utils::{AppError, AppResult};

/// Unwrap a JSON body or turn the rejection into `InvalidRequest`
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::invalid_request(format!(
            "Invalid data: {}",
            rejection.body_text()
        ))),
    }
}
