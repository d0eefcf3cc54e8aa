//! Full-text search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comments::Comment;
use super::posts::Post;
use super::users::User;

/// Search filters. Only `query` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub query: String,
    /// One of [`SearchParams::ALL`], [`SearchParams::POSTS`],
    /// [`SearchParams::COMMENTS`], [`SearchParams::USERS`]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl SearchParams {
    pub const ALL: &'static str = "all";
    pub const POSTS: &'static str = "posts";
    pub const COMMENTS: &'static str = "comments";
    pub const USERS: &'static str = "users";

    /// Search everything for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Restrict results to one kind.
    #[must_use]
    pub fn with_type(mut self, search_type: &str) -> Self {
        self.search_type = Some(search_type.to_string());
        self
    }

    /// Restrict results to a date window.
    #[must_use]
    pub const fn with_dates(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }
}

/// Search hits. Lists for kinds that were not searched are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub posts: Vec<Post>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub comments: Vec<Comment>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub users: Vec<User>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub total_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub page: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub limit: i64,
}

impl SearchResponse {
    /// Number of hits on this page across all kinds.
    pub fn hits_on_page(&self) -> usize {
        self.posts.len() + self.comments.len() + self.users.len()
    }
}
