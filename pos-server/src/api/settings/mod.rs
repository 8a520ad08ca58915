//! Settings API 模块
//!
//! 价格表、取号计数器 (重置/修复) 和系统重置

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(handler::get).put(handler::update))
}
