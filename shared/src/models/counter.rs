//! Counter Model (token sequence + quick-price lists)

use serde::{Deserialize, Serialize};

/// Quick prices offered for both categories until an admin edits them
pub const DEFAULT_PRICES: [f64; 3] = [100.0, 150.0, 200.0];

/// Singleton counter record
///
/// `current_token_number` is `None` when the stored value is missing or
/// corrupt (non-integer, negative). It reads as a number again once the
/// counter is repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    pub current_token_number: Option<i64>,
    pub bike_prices: Vec<f64>,
    pub car_prices: Vec<f64>,
    /// Last mutation (Unix millis)
    pub updated_at: i64,
}

/// Settings update payload (`PUT /settings`)
///
/// Every field is optional. `system_reset` wins over everything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub bike_prices: Option<Vec<f64>>,
    #[serde(default)]
    pub car_prices: Option<Vec<f64>>,
    #[serde(default)]
    pub reset_tokens: bool,
    #[serde(default)]
    pub fix_tokens: bool,
    #[serde(default)]
    pub system_reset: bool,
}

/// Response of a full system wipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemResetResult {
    pub message: String,
    pub deleted_orders: u64,
    pub deleted_products: u64,
    pub deleted_notifications: u64,
    pub settings: Counter,
}
