//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Every check here runs before any storage access, so a rejected request
//! never touches the token counter.

use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use shared::models::{OrderCreate, OrderDraft, ServiceCategory};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, notification title
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, notification messages
pub const MAX_NOTE_LEN: usize = 500;

/// Vehicle registration numbers
pub const MAX_VEHICLE_NO_LEN: usize = 32;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Quick-price list entries per category
pub const MAX_PRICE_LIST_LEN: usize = 24;

// ── Money limits ────────────────────────────────────────────────────

/// Maximum allowed amount for a single order, product or quick price
pub const MAX_AMOUNT: f64 = 1_000_000.0;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Positive, finite money value no larger than [`MAX_AMOUNT`]
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_AMOUNT
}

/// Read an amount from a loosely typed JSON value.
///
/// Accepts JSON numbers and numeric strings (`"150"`, `" 99.5 "`).
pub fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

// ── Order validation ────────────────────────────────────────────────

/// Turn a raw order payload into a draft, or reject it as an invalid request.
pub fn validate_order(raw: OrderCreate) -> Result<OrderDraft, AppError> {
    let category = match raw.category.as_deref().map(str::trim) {
        None | Some("") => {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                "Invalid data: category is required",
            )
            .with_detail("field", "category"));
        }
        Some(c) => c.parse::<ServiceCategory>().map_err(|e| {
            AppError::with_message(ErrorCode::InvalidCategory, format!("Invalid data: {e}"))
                .with_detail("field", "category")
        })?,
    };

    let amount = raw
        .amount
        .as_ref()
        .and_then(parse_amount)
        .filter(|a| is_valid_amount(*a))
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvalidAmount,
                format!("Invalid data: amount must be a positive number up to {MAX_AMOUNT}"),
            )
            .with_detail("field", "amount")
        })?;

    validate_optional_text(&raw.vehicle_no, "vehicleNo", MAX_VEHICLE_NO_LEN)?;
    validate_optional_text(&raw.customer_email, "customerEmail", MAX_EMAIL_LEN)?;

    Ok(OrderDraft {
        category,
        amount,
        vehicle_no: raw.vehicle_no.map(|v| v.trim().to_string()).unwrap_or_default(),
        customer_email: raw
            .customer_email
            .map(|e| e.trim().to_string())
            .unwrap_or_default(),
    })
}

// ── Settings / receipt validation ───────────────────────────────────

/// Quick-price lists must be non-empty and hold only positive numbers.
pub fn validate_price_list(prices: &[f64], field: &str) -> Result<(), AppError> {
    if prices.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::InvalidPriceList,
            format!("{field} must not be empty"),
        ));
    }
    if prices.len() > MAX_PRICE_LIST_LEN {
        return Err(AppError::with_message(
            ErrorCode::InvalidPriceList,
            format!("{field} holds too many prices (max {MAX_PRICE_LIST_LEN})"),
        ));
    }
    if let Some(bad) = prices.iter().find(|p| !is_valid_amount(**p)) {
        return Err(AppError::with_message(
            ErrorCode::InvalidPriceList,
            format!("{field} contains an invalid price: {bad}"),
        ));
    }
    Ok(())
}

/// Same shape check the receipt form uses: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // at least one dot with text on both sides
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
