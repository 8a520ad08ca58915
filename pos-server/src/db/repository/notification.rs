//! Notification Repository

use super::{RepoError, RepoResult};
use shared::models::{Notification, NotificationKind};
use sqlx::SqlitePool;

/// Most recent notifications returned by a list call
pub const LIST_LIMIT: i64 = 50;

pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Notification>> {
    let rows = sqlx::query_as::<_, Notification>(
        "SELECT id, title, message, kind, is_read, created_at FROM notifications ORDER BY created_at DESC, rowid DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    title: &str,
    message: &str,
    kind: NotificationKind,
) -> RepoResult<Notification> {
    let notification = Notification {
        id: shared::util::new_id(),
        title: title.trim().to_string(),
        message: message.trim().to_string(),
        kind,
        is_read: false,
        created_at: shared::util::now_millis(),
    };
    if notification.title.is_empty() || notification.message.is_empty() {
        return Err(RepoError::Validation(
            "Notification title and message are required".into(),
        ));
    }

    sqlx::query(
        "INSERT INTO notifications (id, title, message, kind, is_read, created_at) VALUES (?1, ?2, ?3, ?4, 0, ?5)",
    )
    .bind(&notification.id)
    .bind(&notification.title)
    .bind(&notification.message)
    .bind(notification.kind)
    .bind(notification.created_at)
    .execute(pool)
    .await?;

    Ok(notification)
}

/// Returns the number of notifications that flipped to read
pub async fn mark_all_read(pool: &SqlitePool) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE notifications SET is_read = 1 WHERE is_read = 0")
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
