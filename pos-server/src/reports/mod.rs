//! Sales reports over daily / weekly / monthly windows
//!
//! Windows are computed in the server's local time zone. Reports are
//! derived from the order history on every request; nothing is cached.

pub mod aggregate;
pub mod window;

pub use aggregate::summarize;
pub use window::{ReportWindow, window_for};

use chrono::{DateTime, TimeZone};
use shared::models::{ReportPeriod, SalesReport};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, order};

/// Build the report for `period` as seen at `now`
pub async fn generate<Tz: TimeZone>(
    pool: &SqlitePool,
    period: ReportPeriod,
    now: &DateTime<Tz>,
) -> RepoResult<SalesReport> {
    let window = window_for(period, now);
    let orders = order::find_by_date_range(pool, window.start, window.end).await?;
    Ok(summarize(period, &window, &orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use chrono::Utc;

    async fn insert(pool: &SqlitePool, category: &str, amount: f64, timestamp: i64) {
        sqlx::query(
            "INSERT INTO orders (id, token_number, category, amount, vehicle_no, customer_email, timestamp) VALUES (?, 1, ?, ?, '', '', ?)",
        )
        .bind(shared::util::new_id())
        .bind(category)
        .bind(amount)
        .bind(timestamp)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_generate_empty_database() {
        let pool = test_pool().await;
        let now = Utc::now();
        for period in [ReportPeriod::Daily, ReportPeriod::Weekly, ReportPeriod::Monthly] {
            let report = generate(&pool, period, &now).await.unwrap();
            assert_eq!(report.total_orders, 0);
            assert_eq!(report.total_revenue, 0.0);
        }
    }

    #[tokio::test]
    async fn test_generate_daily_vs_weekly() {
        let pool = test_pool().await;
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let day = 24 * 60 * 60 * 1000;
        let ts = now.timestamp_millis();

        insert(&pool, "bike", 100.0, ts).await;
        insert(&pool, "car", 200.0, ts - 2 * day).await;
        insert(&pool, "car", 999.0, ts - 10 * day).await;

        let daily = generate(&pool, ReportPeriod::Daily, &now).await.unwrap();
        assert_eq!(daily.total_orders, 1);
        assert_eq!(daily.bike_revenue, 100.0);

        let weekly = generate(&pool, ReportPeriod::Weekly, &now).await.unwrap();
        assert_eq!(weekly.total_orders, 2);
        assert_eq!(weekly.total_revenue, 300.0);
        assert_eq!(weekly.car_orders, 1);

        let monthly = generate(&pool, ReportPeriod::Monthly, &now).await.unwrap();
        assert_eq!(monthly.total_orders, 3);
        assert_eq!(monthly.total_revenue, 1299.0);
    }
}
