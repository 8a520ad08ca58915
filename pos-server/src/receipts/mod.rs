//! Receipt delivery
//!
//! Email transport is an external collaborator. The server only depends on
//! [`ReceiptMailer`]; the bundled [`LogMailer`] records the send.

use async_trait::async_trait;
use shared::models::ReceiptOrder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("receipt delivery failed: {0}")]
    Delivery(String),
}

#[async_trait]
pub trait ReceiptMailer: Send + Sync + std::fmt::Debug {
    /// Deliver a receipt for `order` to `email`
    async fn send_receipt(&self, email: &str, order: &ReceiptOrder) -> Result<(), MailError>;
}

/// Mailer that only logs; stands in until an SMTP relay is configured
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl ReceiptMailer for LogMailer {
    async fn send_receipt(&self, email: &str, order: &ReceiptOrder) -> Result<(), MailError> {
        tracing::info!(
            to = %email,
            order_id = ?order.id,
            token_number = ?order.token_number,
            category = ?order.category,
            amount = ?order.amount,
            "Receipt email sent"
        );
        Ok(())
    }
}
