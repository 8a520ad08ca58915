//! Settings API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use shared::models::{Counter, SettingsUpdate, SystemResetResult};

use crate::api::extract::json_body;
use crate::core::ServerState;
use crate::db::repository::{RepoError, counter, maintenance};
use crate::utils::AppResult;
use crate::utils::validation::validate_price_list;

/// `PUT /api/settings` answers with the counter, or with the wipe summary
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SettingsResponse {
    Counter(Counter),
    SystemReset(SystemResetResult),
}

/// GET /api/settings - 读取计数器和价格表
///
/// 缺失时创建默认值，损坏的计数器会被修复为 0
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Counter>> {
    let pool = state.pool();
    counter::repair(pool).await?;
    let settings = counter::get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Counter missing after repair".into()))?;
    Ok(Json(settings))
}

/// PUT /api/settings - 更新价格表 / 重置或修复计数器 / 系统重置
pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> AppResult<Json<SettingsResponse>> {
    let update = json_body(payload)?;
    let pool = state.pool();

    if update.system_reset {
        let stats = maintenance::wipe_all(pool).await?;
        let settings = counter::get_or_create(pool).await?;
        return Ok(Json(SettingsResponse::SystemReset(SystemResetResult {
            message: "System reset completed".to_string(),
            deleted_orders: stats.orders,
            deleted_products: stats.products,
            deleted_notifications: stats.notifications,
            settings,
        })));
    }

    if let Some(prices) = &update.bike_prices {
        validate_price_list(prices, "bikePrices")?;
    }
    if let Some(prices) = &update.car_prices {
        validate_price_list(prices, "carPrices")?;
    }

    if update.bike_prices.is_some() || update.car_prices.is_some() {
        counter::set_prices(
            pool,
            update.bike_prices.as_deref(),
            update.car_prices.as_deref(),
        )
        .await?;
    }

    if update.reset_tokens {
        counter::reset(pool).await?;
        tracing::info!("Token counter reset to 0");
    }

    if update.fix_tokens {
        let repaired = counter::repair(pool).await?;
        tracing::info!(repaired, "Token counter fix requested");
    }

    let settings = counter::get_or_create(pool).await?;
    Ok(Json(SettingsResponse::Counter(settings)))
}
