//! Preimages: the call data behind proposal hashes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A noted preimage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preimage {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub hash: String,
    /// Encoded call length in bytes
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub length: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub section: String,
    /// Decoded call arguments; shape depends on the pallet call
    #[serde(rename = "proposedCall")]
    pub proposed_call: Value,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<String>,
}

impl Preimage {
    /// `section.method`, e.g. `treasury.spend`.
    pub fn call_name(&self) -> String {
        format!("{}.{}", self.section, self.method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreimageListingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreimageListingResponse {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub preimages: Vec<Preimage>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub count: i64,
}
