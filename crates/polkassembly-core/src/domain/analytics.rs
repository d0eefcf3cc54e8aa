//! Proposal analytics and network-wide statistics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalAnalytics {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub post_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub view_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub unique_viewers: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub comment_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reaction_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub vote_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub share_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub daily_stats: Vec<DailyStat>,
    /// Voter count per category (e.g. "aye", "nay", "abstain")
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub voter_breakdown: HashMap<String, i64>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub top_commenters: Vec<UserStat>,
}

impl ProposalAnalytics {
    /// Voters across every breakdown category.
    ///
    /// Returns `None` if the sum overflows.
    pub fn total_voters(&self) -> Option<i64> {
        self.voter_breakdown
            .values()
            .try_fold(0i64, |acc, count| acc.checked_add(*count))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyStat {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub date: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub views: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub comments: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub votes: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reactions: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStat {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub count: i64,
}

/// Network overview counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStats {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub active_proposals: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub total_proposals: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub total_votes: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub total_users: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub total_delegations: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub total_delegated_balance: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub weekly_active_users: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub monthly_active_users: i64,
}
