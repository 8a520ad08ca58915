//! Token issuance
//!
//! Turns a raw order request into a persisted order carrying the next token
//! number. Steps run strictly in this order:
//!
//! 1. validate the request (no storage access)
//! 2. atomically increment the counter
//! 3. insert the order under the returned token
//!
//! A failure in step 3 leaves a gap in the sequence. The token is never
//! handed out twice.

use shared::error::{AppError, ErrorCode};
use shared::models::{Order, OrderCreate};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::repository::{RepoError, counter, order};
use crate::utils::validation::validate_order;

/// Why a token could not be issued
#[derive(Debug, Error)]
pub enum IssueError {
    /// Request rejected before the counter was touched
    #[error("invalid order request: {0}")]
    InvalidRequest(AppError),

    /// The counter increment failed; no token was consumed
    #[error("failed to advance token counter: {0}")]
    Persistence(#[source] RepoError),

    /// The counter advanced but the order row was not written
    #[error("token {token_number} issued but order was not saved: {source}")]
    OrderCreation {
        token_number: i64,
        #[source]
        source: RepoError,
    },
}

impl From<IssueError> for AppError {
    fn from(err: IssueError) -> Self {
        match err {
            IssueError::InvalidRequest(e) => e,
            IssueError::Persistence(e) => AppError::with_message(
                ErrorCode::TokenIssueFailed,
                format!("Failed to issue token: {e}"),
            ),
            IssueError::OrderCreation {
                token_number,
                source,
            } => AppError::with_message(
                ErrorCode::OrderCreationFailed,
                format!("Failed to save order for token {token_number}: {source}"),
            )
            .with_detail("tokenNumber", token_number),
        }
    }
}

/// Issues token numbers against the shared counter
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    pool: SqlitePool,
}

impl TokenIssuer {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate, take the next token and persist the order
    pub async fn issue(&self, raw: OrderCreate) -> Result<Order, IssueError> {
        let draft = validate_order(raw).map_err(IssueError::InvalidRequest)?;

        let token_number = counter::atomic_increment(&self.pool)
            .await
            .map_err(IssueError::Persistence)?;

        match order::create(&self.pool, token_number, &draft).await {
            Ok(order) => {
                tracing::info!(
                    token_number,
                    category = %order.category,
                    amount = order.amount,
                    order_id = %order.id,
                    "Token issued"
                );
                Ok(order)
            }
            Err(source) => {
                tracing::error!(
                    token_number,
                    category = %draft.category,
                    amount = draft.amount,
                    error = %source,
                    "Token consumed but order insert failed, sequence has a gap"
                );
                Err(IssueError::OrderCreation {
                    token_number,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use serde_json::json;
    use shared::models::ServiceCategory;

    fn request(category: &str, amount: serde_json::Value) -> OrderCreate {
        OrderCreate {
            category: Some(category.to_string()),
            amount: Some(amount),
            vehicle_no: Some("TN09XY4321".into()),
            customer_email: None,
        }
    }

    async fn current(pool: &SqlitePool) -> Option<i64> {
        counter::get(pool)
            .await
            .unwrap()
            .and_then(|c| c.current_token_number)
    }

    #[tokio::test]
    async fn test_sequential_tokens() {
        let pool = test_pool().await;
        let issuer = TokenIssuer::new(pool.clone());

        let a = issuer.issue(request("bike", json!(100))).await.unwrap();
        let b = issuer.issue(request("car", json!("200"))).await.unwrap();
        assert_eq!(a.token_number, 1);
        assert_eq!(b.token_number, 2);
        assert_eq!(b.category, ServiceCategory::Car);
        assert_eq!(b.amount, 200.0);
        assert_eq!(current(&pool).await, Some(2));
    }

    #[tokio::test]
    async fn test_invalid_request_leaves_counter_untouched() {
        let pool = test_pool().await;
        let issuer = TokenIssuer::new(pool.clone());
        issuer.issue(request("bike", json!(100))).await.unwrap();

        for bad in [
            request("truck", json!(100)),
            request("bike", json!(0)),
            request("car", json!("twelve")),
            OrderCreate::default(),
        ] {
            let err = issuer.issue(bad).await.unwrap_err();
            assert!(matches!(err, IssueError::InvalidRequest(_)));
            let app: AppError = err.into();
            assert_eq!(app.http_status(), http::StatusCode::BAD_REQUEST);
        }

        assert_eq!(current(&pool).await, Some(1));
        assert_eq!(order::count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reset_restarts_at_one() {
        let pool = test_pool().await;
        let issuer = TokenIssuer::new(pool.clone());
        for _ in 0..3 {
            issuer.issue(request("bike", json!(150))).await.unwrap();
        }
        counter::reset(&pool).await.unwrap();

        let order = issuer.issue(request("car", json!(200))).await.unwrap();
        assert_eq!(order.token_number, 1);
        // History from before the reset is kept
        assert_eq!(order::count(&pool).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_corrupt_counter_is_repaired_on_issue() {
        let pool = test_pool().await;
        counter::ensure(&pool).await.unwrap();
        sqlx::query("UPDATE counter SET current_token_number = 'broken' WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        let issuer = TokenIssuer::new(pool.clone());
        let order = issuer.issue(request("bike", json!(100))).await.unwrap();
        assert_eq!(order.token_number, 1);
    }

    #[tokio::test]
    async fn test_insert_failure_leaves_gap() {
        let pool = test_pool().await;
        let issuer = TokenIssuer::new(pool.clone());
        issuer.issue(request("bike", json!(100))).await.unwrap();

        sqlx::query("DROP TABLE orders").execute(&pool).await.unwrap();

        let err = issuer.issue(request("bike", json!(100))).await.unwrap_err();
        match &err {
            IssueError::OrderCreation { token_number, .. } => assert_eq!(*token_number, 2),
            other => panic!("unexpected error: {other:?}"),
        }
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::OrderCreationFailed);
        assert_eq!(app.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);

        // The consumed token is not reused
        assert_eq!(current(&pool).await, Some(2));
    }

    #[tokio::test]
    async fn test_counter_failure_is_persistence_error() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE counter").execute(&pool).await.unwrap();

        let issuer = TokenIssuer::new(pool.clone());
        let err = issuer.issue(request("car", json!(100))).await.unwrap_err();
        assert!(matches!(err, IssueError::Persistence(_)));
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::TokenIssueFailed);
        assert_eq!(order::count(&pool).await.unwrap(), 0);
    }
}
