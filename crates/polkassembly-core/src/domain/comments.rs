//! Comment threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a comment.
///
/// Older comments are Markdown strings; newer ones are rich-text editor
/// documents whose structure the API does not pin down, so they stay raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentContent {
    /// Plain Markdown text
    Markdown(String),
    /// Rich-text document (blocks, inline marks, mentions)
    Document(Value),
}

impl CommentContent {
    /// The Markdown text, if this is a plain-text comment.
    pub fn as_markdown(&self) -> Option<&str> {
        match self {
            Self::Markdown(text) => Some(text),
            Self::Document(_) => None,
        }
    }
}

impl From<String> for CommentContent {
    fn from(text: String) -> Self {
        Self::Markdown(text)
    }
}

impl From<&str> for CommentContent {
    fn from(text: &str) -> Self {
        Self::Markdown(text.to_string())
    }
}

/// A comment with its nested replies.
///
/// Replies arrive under `replies` or `children` and the parent under
/// `parent_id` or `parentCommentId`, depending on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    /// `null` when the comment body was removed
    pub content: Option<CommentContent>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub updated_at: DateTime<Utc>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub replies: Vec<Comment>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub children: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "parentCommentId", skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
    /// Author sentiment on the proposal, 1 (against) to 5 (for)
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub sentiment: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub is_deleted: bool,
}

impl Comment {
    /// Parent comment id, preferring `parentCommentId` over `parent_id`.
    pub fn parent(&self) -> Option<&str> {
        self.parent_comment_id
            .as_deref()
            .or(self.parent_id.as_deref())
    }

    /// Direct replies, preferring `children` over `replies`.
    pub fn thread(&self) -> &[Self] {
        if self.children.is_empty() {
            &self.replies
        } else {
            &self.children
        }
    }

    /// Number of comments in this subtree, the comment itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self.thread().iter().map(Self::subtree_len).sum::<usize>()
    }
}
