//! In-app notifications and per-user notification settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    #[serde(rename = "type", deserialize_with = "crate::wire::null_as_default")]
    pub notification_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    /// Link target inside the app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub is_read: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
}

/// Which events produce a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub new_proposal: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub proposal_status_change: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub new_comment: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub new_reaction: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub new_follower: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub new_mention: bool,
}

impl NotificationPreferences {
    /// Every event enabled.
    pub const fn all() -> Self {
        Self {
            new_proposal: true,
            proposal_status_change: true,
            new_comment: true,
            new_reaction: true,
            new_follower: true,
            new_mention: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferences_encode_every_flag() {
        let json = serde_json::to_value(NotificationPreferences::default()).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 6);
        assert_eq!(json["new_mention"], false);

        let json = serde_json::to_value(NotificationPreferences::all()).unwrap();
        assert!(json.as_object().unwrap().values().all(|v| v == true));
    }

    #[test]
    fn test_notification_type_key() {
        let n: Notification = serde_json::from_value(json!({
            "id": 3,
            "type": "new_comment",
            "title": "Reply",
            "content": "bob replied",
            "is_read": false
        }))
        .unwrap();
        assert_eq!(n.notification_type, "new_comment");
        assert!(n.url.is_none());
    }
}
