//! Unified error system for the service desk
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Error envelope written to the client
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order / token errors
//! - 6xxx: Product errors
//! - 7xxx: Notification errors
//! - 8xxx: Receipt errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound);
//!
//! let err = AppError::with_message(ErrorCode::InvalidAmount, "Amount must be > 0")
//!     .with_detail("field", "amount");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 4003);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
