//! Orders - token issuance for new service orders

pub mod issuer;

pub use issuer::{IssueError, TokenIssuer};
