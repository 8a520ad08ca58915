//! Notification Model

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Admin notification log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: i64,
}

/// Create notification payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationCreate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<NotificationKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_field_is_named_type() {
        let n = Notification {
            id: "n1".into(),
            title: "Low stock".into(),
            message: "Oil filters running out".into(),
            kind: NotificationKind::Warning,
            is_read: false,
            created_at: 1,
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["isRead"], false);
    }
}
