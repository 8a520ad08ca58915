//! Order Repository
//!
//! Orders are append-only. Ranges use `[start, end)` Unix-millis windows.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderDraft};
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str =
    "id, token_number, category, amount, vehicle_no, customer_email, timestamp";

/// Persist a validated draft under an already issued token number
pub async fn create(pool: &SqlitePool, token_number: i64, draft: &OrderDraft) -> RepoResult<Order> {
    if token_number <= 0 {
        return Err(RepoError::Validation(format!(
            "Token number must be positive: {token_number}"
        )));
    }

    let order = Order {
        id: shared::util::new_id(),
        token_number,
        category: draft.category,
        amount: draft.amount,
        vehicle_no: draft.vehicle_no.clone(),
        customer_email: draft.customer_email.clone(),
        timestamp: shared::util::now_millis(),
    };

    sqlx::query(
        "INSERT INTO orders (id, token_number, category, amount, vehicle_no, customer_email, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(&order.id)
    .bind(order.token_number)
    .bind(order.category)
    .bind(order.amount)
    .bind(&order.vehicle_no)
    .bind(&order.customer_email)
    .bind(order.timestamp)
    .execute(pool)
    .await?;

    Ok(order)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// All orders, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY timestamp DESC, token_number DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Orders created at or after `start_millis`, newest first
pub async fn find_since(pool: &SqlitePool, start_millis: i64) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE timestamp >= ? ORDER BY timestamp DESC, token_number DESC"
    ))
    .bind(start_millis)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Orders with `start_millis <= timestamp < end_millis`, newest first
pub async fn find_by_date_range(
    pool: &SqlitePool,
    start_millis: i64,
    end_millis: i64,
) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE timestamp >= ? AND timestamp < ? ORDER BY timestamp DESC, token_number DESC"
    ))
    .bind(start_millis)
    .bind(end_millis)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
