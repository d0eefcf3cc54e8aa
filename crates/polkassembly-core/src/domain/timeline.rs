//! Governance timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    /// Event kind (e.g. "proposal_created", "status_change")
    #[serde(rename = "type", deserialize_with = "crate::wire::null_as_default")]
    pub entry_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    /// Event-specific payload
    pub data: Value,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub network: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub is_important: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_data_round_trips_raw() {
        let value = json!({
            "id": 1,
            "type": "status_change",
            "title": "Referendum 12 passed",
            "content": "",
            "author": "system",
            "created_at": "2024-06-01T00:00:00Z",
            "data": {"from": "Deciding", "to": "Confirmed", "block": 20_000_000},
            "network": "kusama",
            "is_important": true
        });
        let entry: TimelineEntry = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(entry.data["to"], "Confirmed");
        assert_eq!(serde_json::to_value(&entry).unwrap(), value);
    }

    #[test]
    fn test_params_skip_empty_types() {
        let params = TimelineParams {
            network: Some("polkadot".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"network": "polkadot"})
        );
    }
}
