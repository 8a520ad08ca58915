//! Counter Repository (Singleton)
//!
//! The single `counter` row holds the token sequence and the quick-price
//! lists. Every write is one statement, so concurrent callers are
//! serialized by SQLite's write lock and never observe a torn update.

use super::{RepoError, RepoResult};
use shared::models::{Counter, DEFAULT_PRICES};
use sqlx::{SqliteConnection, SqlitePool};

const SINGLETON_ID: i64 = 1;

/// A stored token is usable only when it is a non-negative INTEGER
const VALID_TOKEN: &str = "typeof(current_token_number) = 'integer' AND current_token_number >= 0";

type CounterRow = (Option<i64>, String, String, i64);

fn default_prices_json() -> RepoResult<String> {
    serde_json::to_string(&DEFAULT_PRICES)
        .map_err(|e| RepoError::Database(format!("Failed to encode default prices: {e}")))
}

fn encode_prices(prices: &[f64]) -> RepoResult<String> {
    serde_json::to_string(prices)
        .map_err(|e| RepoError::Validation(format!("Failed to encode prices: {e}")))
}

fn decode_prices(raw: &str, column: &str) -> Vec<f64> {
    match serde_json::from_str::<Vec<f64>>(raw) {
        Ok(prices) if !prices.is_empty() => prices,
        _ => {
            tracing::warn!(column, raw, "Stored price list is unreadable, using defaults");
            DEFAULT_PRICES.to_vec()
        }
    }
}

fn into_counter((current_token_number, bike, car, updated_at): CounterRow) -> Counter {
    Counter {
        current_token_number,
        bike_prices: decode_prices(&bike, "bike_prices"),
        car_prices: decode_prices(&car, "car_prices"),
        updated_at,
    }
}

/// Create the singleton row with defaults if it does not exist yet
pub async fn ensure(pool: &SqlitePool) -> RepoResult<()> {
    let defaults = default_prices_json()?;
    sqlx::query(
        "INSERT INTO counter (id, current_token_number, bike_prices, car_prices, updated_at) VALUES (?1, 0, ?2, ?2, ?3) ON CONFLICT(id) DO NOTHING",
    )
    .bind(SINGLETON_ID)
    .bind(&defaults)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await?;
    Ok(())
}

/// Read the counter. A corrupt token value reads as `None`.
pub async fn get(pool: &SqlitePool) -> RepoResult<Option<Counter>> {
    let row = sqlx::query_as::<_, CounterRow>(&format!(
        "SELECT CASE WHEN {VALID_TOKEN} THEN current_token_number END, bike_prices, car_prices, updated_at FROM counter WHERE id = ?"
    ))
    .bind(SINGLETON_ID)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(into_counter))
}

pub async fn get_or_create(pool: &SqlitePool) -> RepoResult<Counter> {
    ensure(pool).await?;
    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create counter".into()))
}

/// Atomically advance the token sequence and return the new value.
///
/// Creates the row when missing and restarts from 1 when the stored value
/// is corrupt. Read and write happen in a single statement.
pub async fn atomic_increment(pool: &SqlitePool) -> RepoResult<i64> {
    let defaults = default_prices_json()?;
    let next = sqlx::query_scalar::<_, i64>(&format!(
        "INSERT INTO counter (id, current_token_number, bike_prices, car_prices, updated_at) VALUES (?1, 1, ?2, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET \
         current_token_number = CASE WHEN {VALID_TOKEN} THEN current_token_number + 1 ELSE 1 END, \
         updated_at = excluded.updated_at \
         RETURNING current_token_number"
    ))
    .bind(SINGLETON_ID)
    .bind(&defaults)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;
    Ok(next)
}

/// Set the token sequence back to 0; the next issued token is 1
pub async fn reset(pool: &SqlitePool) -> RepoResult<Counter> {
    let defaults = default_prices_json()?;
    sqlx::query(
        "INSERT INTO counter (id, current_token_number, bike_prices, car_prices, updated_at) VALUES (?1, 0, ?2, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET current_token_number = 0, updated_at = excluded.updated_at",
    )
    .bind(SINGLETON_ID)
    .bind(&defaults)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read counter after reset".into()))
}

/// Replace a corrupt token value with 0. Returns whether anything changed.
pub async fn repair(pool: &SqlitePool) -> RepoResult<bool> {
    ensure(pool).await?;
    let result = sqlx::query(&format!(
        "UPDATE counter SET current_token_number = 0, updated_at = ?1 WHERE id = ?2 AND NOT ({VALID_TOKEN})"
    ))
    .bind(shared::util::now_millis())
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    let repaired = result.rows_affected() > 0;
    if repaired {
        tracing::warn!("Corrupt token counter repaired, sequence restarts at 1");
    }
    Ok(repaired)
}

/// Replace one or both quick-price lists; `None` keeps the stored list
pub async fn set_prices(
    pool: &SqlitePool,
    bike_prices: Option<&[f64]>,
    car_prices: Option<&[f64]>,
) -> RepoResult<Counter> {
    for prices in [bike_prices, car_prices].into_iter().flatten() {
        if prices.is_empty() || prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(RepoError::Validation(
                "Price lists must hold positive numbers".into(),
            ));
        }
    }

    ensure(pool).await?;
    let bike = bike_prices.map(encode_prices).transpose()?;
    let car = car_prices.map(encode_prices).transpose()?;

    sqlx::query(
        "UPDATE counter SET bike_prices = COALESCE(?1, bike_prices), car_prices = COALESCE(?2, car_prices), updated_at = ?3 WHERE id = ?4",
    )
    .bind(bike)
    .bind(car)
    .bind(shared::util::now_millis())
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read counter after price update".into()))
}

/// Restore factory defaults (token 0, default prices) on an open transaction
pub async fn restore_defaults(conn: &mut SqliteConnection) -> RepoResult<()> {
    let defaults = default_prices_json()?;
    sqlx::query(
        "INSERT INTO counter (id, current_token_number, bike_prices, car_prices, updated_at) VALUES (?1, 0, ?2, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET current_token_number = 0, bike_prices = excluded.bike_prices, \
         car_prices = excluded.car_prices, updated_at = excluded.updated_at",
    )
    .bind(SINGLETON_ID)
    .bind(&defaults)
    .bind(shared::util::now_millis())
    .execute(&mut *conn)
    .await?;
    Ok(())
}
