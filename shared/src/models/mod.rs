//! Data models
//!
//! Shared between pos-server and the admin UI (via API, camelCase JSON).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Resource IDs are UUID v4 strings.

pub mod category;
pub mod counter;
pub mod notification;
pub mod order;
pub mod product;
pub mod report;

// Re-exports
pub use category::*;
pub use counter::*;
pub use notification::*;
pub use order::*;
pub use product::*;
pub use report::*;
