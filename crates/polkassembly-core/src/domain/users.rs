//! User accounts, activity and listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actions::Reaction;
use super::comments::Comment;
use super::posts::Post;
use super::votes::Vote;

/// A platform account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Primary linked wallet address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web3_address: Option<String>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub profile_score: f64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub follower_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub following_count: i64,
}

/// Everything a user has produced, as returned by the activity endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivity {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub posts: Vec<Post>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub comments: Vec<Comment>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reactions: Vec<Reaction>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub votes: Vec<Vote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserListingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Sort key understood by the server (e.g. "profile_score")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserListingResponse {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub users: Vec<User>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub count: i64,
}

impl UserActivity {
    /// Whether the user has not produced anything yet.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
            && self.comments.is_empty()
            && self.reactions.is_empty()
            && self.votes.is_empty()
    }
}
