//! Vote cart: batched votes staged before signing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Staged vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartItem {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    #[serde(rename = "postIndexOrHash", deserialize_with = "crate::wire::null_as_default")]
    pub post_index_or_hash: String,
    #[serde(rename = "proposalType", deserialize_with = "crate::wire::null_as_default")]
    pub proposal_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub decision: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub amount: CartAmount,
    /// Conviction multiplier index (0 = 0.1x, 1..=6 = 1x..6x)
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub conviction: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
}

/// Balances per decision, in planck. Only the side matching the decision is
/// normally non-empty; split votes fill more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartAmount {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub abstain: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub aye: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub nay: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddCartItemRequest {
    #[serde(rename = "postIndexOrHash", deserialize_with = "crate::wire::null_as_default")]
    pub post_index_or_hash: String,
    #[serde(rename = "proposalType", deserialize_with = "crate::wire::null_as_default")]
    pub proposal_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub decision: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub amount: CartAmount,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub conviction: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCartItemRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub decision: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub amount: CartAmount,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub conviction: i64,
}

impl From<&CartItem> for UpdateCartItemRequest {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            decision: item.decision.clone(),
            amount: item.amount.clone(),
            conviction: item.conviction,
        }
    }
}
