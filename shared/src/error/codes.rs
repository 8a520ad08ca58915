//! Unified error codes for the service desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / token errors
//! - 6xxx: Product errors
//! - 7xxx: Notification errors
//! - 8xxx: Receipt errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a plain `u16` so the admin UI can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Service category is not bike or car
    InvalidCategory = 4002,
    /// Amount missing, non-numeric or not positive
    InvalidAmount = 4003,
    /// Token was claimed but the order row could not be written
    OrderCreationFailed = 4004,
    /// Counter increment failed, no token consumed
    TokenIssueFailed = 4005,
    /// Quick-price list is empty or holds a non-positive value
    InvalidPriceList = 4006,
    /// Report period is not daily, weekly or monthly
    UnknownReportPeriod = 4007,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price is not positive
    ProductPriceInvalid = 6002,
    /// Product name is empty
    ProductNameRequired = 6003,

    // ==================== 7xxx: Notification ====================
    /// Notification title or message missing
    NotificationInvalid = 7001,

    // ==================== 8xxx: Receipt ====================
    /// Email address is malformed
    InvalidEmail = 8001,
    /// Receipt could not be delivered
    ReceiptDeliveryFailed = 8002,

    // ==================== 9xxx: System ====================
    /// Backing store unreachable
    StorageUnavailable = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidCategory => "Category must be bike or car",
            ErrorCode::InvalidAmount => "Amount must be a positive number",
            ErrorCode::OrderCreationFailed => "Order could not be created, please try again",
            ErrorCode::TokenIssueFailed => "Token could not be issued, please try again",
            ErrorCode::InvalidPriceList => "Price list must contain positive numbers",
            ErrorCode::UnknownReportPeriod => "Unknown report period",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductPriceInvalid => "Product price must be positive",
            ErrorCode::ProductNameRequired => "Product name is required",

            // Notification
            ErrorCode::NotificationInvalid => "Notification title and message are required",

            // Receipt
            ErrorCode::InvalidEmail => "Invalid email format",
            ErrorCode::ReceiptDeliveryFailed => "Failed to send receipt",

            // System
            ErrorCode::StorageUnavailable => "Storage unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidCategory),
            4003 => Ok(ErrorCode::InvalidAmount),
            4004 => Ok(ErrorCode::OrderCreationFailed),
            4005 => Ok(ErrorCode::TokenIssueFailed),
            4006 => Ok(ErrorCode::InvalidPriceList),
            4007 => Ok(ErrorCode::UnknownReportPeriod),

            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductPriceInvalid),
            6003 => Ok(ErrorCode::ProductNameRequired),

            7001 => Ok(ErrorCode::NotificationInvalid),

            8001 => Ok(ErrorCode::InvalidEmail),
            8002 => Ok(ErrorCode::ReceiptDeliveryFailed),

            9003 => Ok(ErrorCode::StorageUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
