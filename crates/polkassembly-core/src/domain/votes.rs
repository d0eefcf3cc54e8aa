//! Referendum votes and voting curves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filters for the vote listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteListingParams {
    #[serde(rename = "postId", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// "aye", "nay" or "abstain"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteListingResponse {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub votes: Vec<Vote>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub count: i64,
}

/// A single cast vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vote {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    /// Voter address
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub voter: String,
    /// Locked balance in planck
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub balance: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub vote: String,
    /// Conviction lock period
    #[serde(rename = "lockPeriod", deserialize_with = "crate::wire::null_as_default")]
    pub lock_period: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub decision: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "delegatedTo", skip_serializing_if = "Option::is_none")]
    pub delegated_to: Option<String>,
    #[serde(rename = "isDelegated", deserialize_with = "crate::wire::null_as_default")]
    pub is_delegated: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub conviction_count: i64,
}

/// One sample of a referendum's approval/support curve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingCurveData {
    #[serde(rename = "blockNumber", deserialize_with = "crate::wire::null_as_default")]
    pub block_number: i64,
    #[serde(rename = "ayeAmount", deserialize_with = "crate::wire::null_as_default")]
    pub aye_amount: String,
    #[serde(rename = "nayAmount", deserialize_with = "crate::wire::null_as_default")]
    pub nay_amount: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub support: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub turnout: String,
}

/// Vote on a referendum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateVoteRequest {
    #[serde(rename = "postId", deserialize_with = "crate::wire::null_as_default")]
    pub post_id: i64,
    /// "aye" or "nay"
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub vote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(rename = "lockPeriod", skip_serializing_if = "Option::is_none")]
    pub lock_period: Option<i64>,
}

impl CreateVoteRequest {
    pub const AYE: &'static str = "aye";
    pub const NAY: &'static str = "nay";

    /// An aye vote on the given post.
    pub fn aye(post_id: i64) -> Self {
        Self {
            post_id,
            vote: Self::AYE.to_string(),
            ..Default::default()
        }
    }

    /// A nay vote on the given post.
    pub fn nay(post_id: i64) -> Self {
        Self {
            post_id,
            vote: Self::NAY.to_string(),
            ..Default::default()
        }
    }

    /// Lock `balance` with the given conviction lock period.
    #[must_use]
    pub fn with_conviction(mut self, balance: impl Into<String>, lock_period: i64) -> Self {
        self.balance = Some(balance.into());
        self.lock_period = Some(lock_period);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_vote_constructors() {
        let json = serde_json::to_value(CreateVoteRequest::aye(12)).unwrap();
        assert_eq!(json, json!({"postId": 12, "vote": "aye"}));

        let req = CreateVoteRequest::nay(12).with_conviction("10000000000", 3);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            json!({"postId": 12, "vote": "nay", "balance": "10000000000", "lockPeriod": 3})
        );
    }

    #[test]
    fn test_vote_decodes_delegation() {
        let vote: Vote = serde_json::from_value(json!({
            "id": "v1",
            "voter": "5F...",
            "balance": "5000",
            "vote": "aye",
            "lockPeriod": 6,
            "decision": "aye",
            "created_at": "2024-02-10T08:00:00.123Z",
            "delegatedTo": "5D...",
            "isDelegated": true,
            "conviction_count": 30000
        }))
        .unwrap();
        assert!(vote.is_delegated);
        assert_eq!(vote.delegated_to.as_deref(), Some("5D..."));
        assert_eq!(vote.lock_period, 6);
        assert_eq!(vote.conviction_count, 30000);
    }

    #[test]
    fn test_listing_params_keys() {
        let params = VoteListingParams {
            post_id: Some(5),
            decision: Some("nay".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"postId": 5, "decision": "nay"})
        );
    }
}
