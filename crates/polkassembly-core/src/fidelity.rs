//! Round-trip fidelity checking.
//!
//! A payload is decoded into its record type and encoded again; the two JSON
//! trees are then compared semantically. Differences fall in three buckets:
//!
//! - **dropped**: keys the record type does not know about
//! - **added**: keys the record always emits but the payload left out
//! - **changed**: values that do not survive the trip
//!
//! Numbers compare by value and RFC 3339 strings by instant, so `1.0` vs `1`
//! or `.000Z` vs `Z` are not reported. A `null` that comes back as the
//! type's zero value (or not at all) is equivalent too.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CodecResult;

/// A key emitted on re-encode that the original payload did not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedKey {
    /// Location, e.g. `$.items[0].metrics`
    pub path: String,
    /// The emitted value is a zero value (`null`, `""`, `0`, `false`,
    /// empty list/object, zero timestamp)
    pub is_default: bool,
}

/// Outcome of comparing a payload with its decode→encode image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FidelityReport {
    pub dropped: Vec<String>,
    pub added: Vec<AddedKey>,
    pub changed: Vec<String>,
}

impl FidelityReport {
    /// Nothing dropped and nothing changed.
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty() && self.changed.is_empty()
    }

    /// Lossless, and the re-encoded payload has no extra keys.
    pub fn is_exact(&self) -> bool {
        self.is_lossless() && self.added.is_empty()
    }

    /// Every added key carries a zero value.
    pub fn only_default_additions(&self) -> bool {
        self.added.iter().all(|added| added.is_default)
    }
}

/// Decode `value` as `T` and encode it again.
pub fn roundtrip<T>(value: &Value) -> CodecResult<Value>
where
    T: DeserializeOwned + Serialize,
{
    let record: T = serde_json::from_value(value.clone())?;
    Ok(serde_json::to_value(&record)?)
}

/// Round-trip `value` through `T` and compare the result with the input.
pub fn check<T>(value: &Value) -> CodecResult<FidelityReport>
where
    T: DeserializeOwned + Serialize,
{
    let reencoded = roundtrip::<T>(value)?;
    Ok(compare(value, &reencoded))
}

/// Compare an original payload with its re-encoded form.
pub fn compare(original: &Value, reencoded: &Value) -> FidelityReport {
    let mut report = FidelityReport::default();
    walk("$", original, reencoded, &mut report);
    report
}

fn walk(path: &str, original: &Value, reencoded: &Value, report: &mut FidelityReport) {
    match (original, reencoded) {
        (Value::Object(before), Value::Object(after)) => walk_object(path, before, after, report),
        (Value::Array(before), Value::Array(after)) => {
            if before.len() != after.len() {
                report.changed.push(path.to_string());
                return;
            }
            for (i, (b, a)) in before.iter().zip(after).enumerate() {
                walk(&format!("{path}[{i}]"), b, a, report);
            }
        }
        (Value::Null, after) => {
            if !is_zero(after) {
                report.changed.push(path.to_string());
            }
        }
        (before, after) => {
            if !scalar_eq(before, after) {
                report.changed.push(path.to_string());
            }
        }
    }
}

fn walk_object(
    path: &str,
    before: &Map<String, Value>,
    after: &Map<String, Value>,
    report: &mut FidelityReport,
) {
    for (key, value) in before {
        let child = format!("{path}.{key}");
        match after.get(key) {
            Some(reencoded) => walk(&child, value, reencoded, report),
            None if value.is_null() => {}
            None => report.dropped.push(child),
        }
    }
    for (key, value) in after {
        if !before.contains_key(key) {
            report.added.push(AddedKey {
                path: format!("{path}.{key}"),
                is_default: is_zero(value),
            });
        }
    }
}

fn scalar_eq(before: &Value, after: &Value) -> bool {
    match (before, after) {
        (Value::Number(b), Value::Number(a)) => {
            if let (Some(b), Some(a)) = (b.as_i64(), a.as_i64()) {
                b == a
            } else if let (Some(b), Some(a)) = (b.as_u64(), a.as_u64()) {
                b == a
            } else {
                b.as_f64() == a.as_f64()
            }
        }
        (Value::String(b), Value::String(a)) => {
            b == a
                || matches!(
                    (parse_timestamp(b), parse_timestamp(a)),
                    (Some(b), Some(a)) if b == a
                )
        }
        _ => before == after,
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}

/// Zero timestamps: Unix epoch (chrono's default) and year 1 (the API's
/// own "unset" marker).
fn is_zero_timestamp(text: &str) -> bool {
    parse_timestamp(text).is_some_and(|t| {
        let secs = t.timestamp();
        secs == 0 || secs == -62_135_596_800
    })
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || is_zero_timestamp(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.values().all(is_zero),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, Post, PostListingResponse};
    use serde_json::json;

    #[test]
    fn test_identical_payloads_are_exact() {
        let value = json!({"a": 1, "b": ["x", "y"], "c": {"d": true}});
        let report = compare(&value, &value);
        assert!(report.is_exact());
    }

    #[test]
    fn test_dropped_keys() {
        let report = compare(&json!({"a": 1, "unknown": 2}), &json!({"a": 1}));
        assert_eq!(report.dropped, vec!["$.unknown"]);
        assert!(!report.is_lossless());
    }

    #[test]
    fn test_null_key_missing_after_is_equivalent() {
        let report = compare(&json!({"a": 1, "parent_id": null}), &json!({"a": 1}));
        assert!(report.is_exact());
    }

    #[test]
    fn test_added_keys_flag_defaults() {
        let report = compare(
            &json!({"id": "x"}),
            &json!({"id": "x", "tags": [], "index": 0, "title": "set"}),
        );
        assert!(report.is_lossless());
        assert!(!report.is_exact());
        assert_eq!(report.added.len(), 3);
        assert!(!report.only_default_additions());
        let title = report.added.iter().find(|a| a.path == "$.title").unwrap();
        assert!(!title.is_default);
    }

    #[test]
    fn test_numbers_and_timestamps_compare_semantically() {
        let report = compare(
            &json!({"score": 1.0, "at": "2024-01-01T00:00:00.000Z", "off": "2024-01-01T02:00:00+02:00"}),
            &json!({"score": 1, "at": "2024-01-01T00:00:00Z", "off": "2024-01-01T00:00:00Z"}),
        );
        assert!(report.is_exact(), "{report:?}");
    }

    #[test]
    fn test_changed_values_and_array_lengths() {
        let report = compare(
            &json!({"a": "x", "list": [1, 2], "nested": [{"v": 1}]}),
            &json!({"a": "y", "list": [1], "nested": [{"v": 2}]}),
        );
        assert_eq!(report.changed, vec!["$.a", "$.list", "$.nested[0].v"]);
    }

    #[test]
    fn test_null_becoming_zero_value_is_equivalent() {
        let report = compare(&json!({"tags": null}), &json!({"tags": []}));
        assert!(report.is_exact());

        let report = compare(&json!({"tags": null}), &json!({"tags": ["a"]}));
        assert_eq!(report.changed, vec!["$.tags"]);
    }

    #[test]
    fn test_zero_timestamps_are_defaults() {
        assert!(is_zero(&json!("1970-01-01T00:00:00Z")));
        assert!(is_zero(&json!("0001-01-01T00:00:00Z")));
        assert!(!is_zero(&json!("2024-01-01T00:00:00Z")));
        assert!(is_zero(&json!({"reactions": {"like": 0}, "comments": 0})));
    }

    #[test]
    fn test_post_round_trip_keeps_aliases() {
        let value = json!({
            "id": "abc",
            "post_id": 5,
            "index": 5,
            "title": "Runtime upgrade",
            "content": "Upgrade to v1.2",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "post_type": "referendums_v2",
            "proposalType": "ReferendumV2",
            "network": "polkadot",
            "dataSource": "polkassembly",
            "allowedCommentor": "all",
            "isDeleted": false,
            "isDefaultContent": false,
            "tags": ["upgrade"],
            "metrics": {"reactions": {"like": 3, "dislike": 0}, "comments": 2}
        });
        let report = check::<Post>(&value).unwrap();
        assert!(report.is_exact(), "{report:?}");
    }

    #[test]
    fn test_unknown_field_is_reported_dropped() {
        let value = json!({"posts": [], "items": [], "count": 0, "totalCount": 0, "nextCursor": "x"});
        let report = check::<PostListingResponse>(&value).unwrap();
        assert_eq!(report.dropped, vec!["$.nextCursor"]);
    }

    #[test]
    fn test_sparse_comment_adds_only_defaults() {
        let report = check::<Comment>(&json!({"id": "c1", "content": "hi"})).unwrap();
        assert!(report.is_lossless());
        assert!(report.only_default_additions(), "{report:?}");
    }

    #[test]
    fn test_roundtrip_type_mismatch_is_error() {
        assert!(roundtrip::<Post>(&json!({"index": "not a number"})).is_err());
    }
}
