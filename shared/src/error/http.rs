//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::UnknownReportPeriod => StatusCode::NOT_FOUND,

            Self::AlreadyExists => StatusCode::CONFLICT,

            Self::OrderCreationFailed
            | Self::TokenIssueFailed
            | Self::ReceiptDeliveryFailed
            | Self::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ProductNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::InvalidRequest.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidAmount.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidPriceList.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::InvalidEmail.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_error_status() {
        for code in [
            ErrorCode::OrderCreationFailed,
            ErrorCode::TokenIssueFailed,
            ErrorCode::StorageUnavailable,
        ] {
            assert_eq!(code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
