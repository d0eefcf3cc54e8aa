//! Treasury proposals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryProposal {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub proposal_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub proposer: String,
    /// Requested amount in planck
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub beneficiary: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub bond: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTreasuryProposalRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub beneficiary: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_treasury_proposal_decode() {
        let proposal: TreasuryProposal = serde_json::from_value(json!({
            "proposal_id": 301,
            "proposer": "1abc",
            "value": "250000000000000",
            "beneficiary": "1def",
            "bond": "12500000000000",
            "status": "Proposed",
            "created_at": "2022-11-20T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(proposal.proposal_id, 301);
        assert_eq!(proposal.value, "250000000000000");
    }
}
