//! Treasury tips.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tip {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub hash: String,
    /// Tip recipient
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub who: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub finder: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reason: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub tips: Vec<TipInfo>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
}

impl Tip {
    /// Sum of all tipped values.
    ///
    /// Returns `None` if a value is not a decimal integer or the sum overflows.
    pub fn total_tipped(&self) -> Option<u128> {
        self.tips.iter().try_fold(0u128, |acc, tip| {
            acc.checked_add(tip.value.trim().parse::<u128>().ok()?)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipInfo {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub tipper: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTipRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub hash: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reason: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub who: String,
}
