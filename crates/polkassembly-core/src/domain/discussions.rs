//! Off-chain discussions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discussion {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub view_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub comment_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reaction_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub updated_at: DateTime<Utc>,
    /// Unset while the discussion has no comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_comment_at: Option<DateTime<Utc>>,
}

impl Discussion {
    /// Most recent activity: the last comment, or the last edit.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_comment_at
            .map_or(self.updated_at, |commented| commented.max(self.updated_at))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDiscussionRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub tags: Vec<String>,
}
