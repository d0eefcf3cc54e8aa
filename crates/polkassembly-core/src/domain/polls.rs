//! Polls attached to posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poll {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub options: Vec<PollOption>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub end_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_by: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub voter_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
}

impl Poll {
    /// Option with the most votes; the first one listed wins ties.
    pub fn leading_option(&self) -> Option<&PollOption> {
        self.options.iter().fold(None, |best, option| match best {
            Some(current) if current.vote_count >= option.vote_count => Some(current),
            _ => Some(option),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollOption {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub vote_count: i64,
    /// Share of votes, 0-100
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePollRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub options: Vec<String>,
    /// Closing time. Left at its default this encodes as the Unix epoch,
    /// not the year-1 zero time older clients sent; set it before sending.
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub end_at: DateTime<Utc>,
    /// Post the poll is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollVoteRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub option_id: i64,
}
