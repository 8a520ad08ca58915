//! Notification API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/notifications",
        get(handler::list)
            .post(handler::create)
            .put(handler::mark_all_read),
    )
}
