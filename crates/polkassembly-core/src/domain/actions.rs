//! User actions on posts: commenting, reacting and reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comments::CommentContent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub content: CommentContent,
    /// Reply target; unset for top-level comments
    #[serde(rename = "parentCommentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Address the comment is made from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl AddCommentRequest {
    /// A top-level comment.
    pub fn new(content: impl Into<CommentContent>) -> Self {
        Self {
            content: content.into(),
            parent_id: None,
            address: None,
        }
    }

    /// A reply to an existing comment.
    pub fn reply(parent_id: impl Into<String>, content: impl Into<CommentContent>) -> Self {
        Self {
            content: content.into(),
            parent_id: Some(parent_id.into()),
            address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: CommentContent,
}

/// A reaction left by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    /// Reaction kind (e.g. "like", "dislike")
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reaction: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
}

/// A moderation report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    /// Reported content kind (e.g. "post", "comment")
    #[serde(rename = "type", deserialize_with = "crate::wire::null_as_default")]
    pub report_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reason: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub comments: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reported_by: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateReportRequest {
    #[serde(rename = "type", deserialize_with = "crate::wire::null_as_default")]
    pub report_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
