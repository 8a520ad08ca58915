//! Order Model

use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// Finalized order (immutable once written)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Human-facing number, unique since the last counter reset
    pub token_number: i64,
    pub category: ServiceCategory,
    pub amount: f64,
    #[serde(default)]
    pub vehicle_no: String,
    #[serde(default)]
    pub customer_email: String,
    /// Creation time (Unix millis)
    pub timestamp: i64,
}

/// Raw order payload as submitted by the counter UI
///
/// Fields stay loosely typed so that a bad value is reported as an
/// invalid request instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

/// Validated order draft, ready for token issuance
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub category: ServiceCategory,
    pub amount: f64,
    pub vehicle_no: String,
    pub customer_email: String,
}

/// Order details printed on a receipt
///
/// The receipt form may echo back only part of an order, so every field is
/// optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptOrder {
    pub id: Option<String>,
    pub token_number: Option<i64>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub vehicle_no: Option<String>,
    pub timestamp: Option<i64>,
}

/// Receipt email request (`POST /send-receipt`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub order: Option<ReceiptOrder>,
}
