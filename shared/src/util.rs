/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque resource ID (UUID v4, simple form).
///
/// Used for orders, products and notifications. Collision-free under
/// concurrent inserts, unlike time-based ids.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
