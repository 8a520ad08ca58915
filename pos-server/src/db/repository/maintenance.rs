//! Maintenance operations spanning several tables

use super::{RepoResult, counter};
use sqlx::SqlitePool;

/// Row counts removed by [`wipe_all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipeStats {
    pub orders: u64,
    pub products: u64,
    pub notifications: u64,
}

/// Delete every order, product and notification and restore counter
/// defaults, all in one transaction
pub async fn wipe_all(pool: &SqlitePool) -> RepoResult<WipeStats> {
    let mut tx = pool.begin().await?;

    let orders = sqlx::query("DELETE FROM orders")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let products = sqlx::query("DELETE FROM products")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let notifications = sqlx::query("DELETE FROM notifications")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    counter::restore_defaults(&mut *tx).await?;

    tx.commit().await?;

    tracing::warn!(orders, products, notifications, "System data wiped");
    Ok(WipeStats {
        orders,
        products,
        notifications,
    })
}
