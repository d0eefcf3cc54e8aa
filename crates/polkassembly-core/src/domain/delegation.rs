//! Delegation dashboard records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Network-wide delegation totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationStats {
    #[serde(rename = "totalDelegations", deserialize_with = "crate::wire::null_as_default")]
    pub total_delegations: i64,
    #[serde(rename = "totalDelegates", deserialize_with = "crate::wire::null_as_default")]
    pub total_delegates: i64,
    #[serde(rename = "totalBalance", deserialize_with = "crate::wire::null_as_default")]
    pub total_balance: String,
    #[serde(rename = "weeklyDelegations", deserialize_with = "crate::wire::null_as_default")]
    pub weekly_delegations: i64,
}

/// A delegate profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delegate {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub manifesto: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub delegations_count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub active_proposals: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub voted_proposals: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub score: i64,
}

/// Register as a Polkassembly delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePaDelegateRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub manifesto: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePaDelegateRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub manifesto: String,
}

/// Delegation totals for one track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackStats {
    #[serde(rename = "trackId", deserialize_with = "crate::wire::null_as_default")]
    pub track_id: i64,
    #[serde(rename = "trackName", deserialize_with = "crate::wire::null_as_default")]
    pub track_name: String,
    #[serde(rename = "delegatedAmount", deserialize_with = "crate::wire::null_as_default")]
    pub delegated_amount: String,
    #[serde(rename = "delegationsCount", deserialize_with = "crate::wire::null_as_default")]
    pub delegations_count: i64,
}

/// Conviction level of a delegation on one track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLevelData {
    #[serde(rename = "trackId", deserialize_with = "crate::wire::null_as_default")]
    pub track_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub level: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub multiplier: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delegate_optional_image() {
        let delegate: Delegate = serde_json::from_value(json!({
            "address": "14Gn...",
            "name": "W3F",
            "delegations_count": 120,
            "score": 88
        }))
        .unwrap();
        assert!(delegate.image.is_none());
        let json = serde_json::to_value(&delegate).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["delegations_count"], 120);
        assert_eq!(json["manifesto"], "");
    }

    #[test]
    fn test_track_keys_are_camel_case() {
        let stats = TrackStats {
            track_id: 0,
            track_name: "root".to_string(),
            delegated_amount: "1".to_string(),
            delegations_count: 2,
        };
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({"trackId": 0, "trackName": "root", "delegatedAmount": "1", "delegationsCount": 2})
        );
    }
}
