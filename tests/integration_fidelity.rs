//! Round-trip fidelity of every captured fixture.
//!
//! Decoding a documented payload and encoding it again must not lose keys or
//! change values; keys may only appear when the record always emits them.

mod common;

use common::fixtures;
use polkassembly::{Comment, Post, PostListingResponse, SchemaKind, compare, roundtrip};
use serde_json::json;

#[test]
fn test_every_fixture_is_lossless() {
    let all = fixtures::all();
    assert!(all.len() >= 20, "fixture set shrank to {}", all.len());

    for (name, kind, value) in all {
        let report = kind
            .check(&value)
            .unwrap_or_else(|e| panic!("{name} does not decode as {kind}: {e}"));
        assert!(report.is_lossless(), "{name}: {report:?}");
        assert!(report.only_default_additions(), "{name}: {report:?}");
    }
}

#[test]
fn test_complete_fixtures_are_exact() {
    for (name, kind, value) in fixtures::all() {
        let report = kind.check(&value).unwrap();
        assert!(report.is_exact(), "{name}: {report:?}");
    }
}

#[test]
fn test_listing_with_null_legacy_list() {
    let report = fixtures::check::<PostListingResponse>("post_listing_response.json");
    assert!(report.is_exact(), "{report:?}");
}

#[test]
fn test_nested_onchain_info_survives() {
    let value = fixtures::load("post.onchain.json");
    let reencoded = roundtrip::<Post>(&value).unwrap();
    assert_eq!(
        reencoded["onChainInfo"]["voteMetrics"]["aye"],
        json!({"count": 212, "value": "98000000000000000"})
    );
    assert_eq!(
        reencoded["publicUser"]["profileDetails"]["achievementBadges"][0]["name"],
        "Decentralised Voice"
    );
    assert!(reencoded["onChainInfo"].get("preparePeriodEndsAt").is_none());
}

#[test]
fn test_null_required_fields_decode_as_zero_values() {
    let post: Post = fixtures::decode("post.nulls.json");
    assert!(post.title.is_empty());
    assert!(post.content.is_empty());
    assert_eq!(post.created_at.timestamp(), 0);
    assert!(post.tags.is_empty());
    assert_eq!(post.index, 401);

    let report = fixtures::check::<Post>("post.nulls.json");
    assert!(report.is_exact(), "{report:?}");
}

#[test]
fn test_offset_timestamps_normalize_to_utc() {
    let mut value = fixtures::load("post.onchain.json");
    value["createdAt"] = json!("2024-05-10T10:00:00+02:00");
    let reencoded = roundtrip::<Post>(&value).unwrap();
    assert_eq!(reencoded["createdAt"], "2024-05-10T08:00:00Z");
    assert!(compare(&value, &reencoded).is_exact());
}

#[test]
fn test_rich_text_comment_content_is_kept_verbatim() {
    let value = fixtures::load("comment.thread.json");
    let reencoded = roundtrip::<Comment>(&value).unwrap();
    assert_eq!(
        reencoded["children"][0]["content"],
        value["children"][0]["content"]
    );
}

#[test]
fn test_sparse_payload_gains_only_defaults() {
    let sparse = json!({"id": "c-1", "content": "hi", "created_at": "2024-01-01T00:00:00Z"});
    let report = SchemaKind::Comment.check(&sparse).unwrap();
    assert!(report.is_lossless());
    assert!(!report.is_exact());
    let added: Vec<&str> = report.added.iter().map(|a| a.path.as_str()).collect();
    assert!(added.contains(&"$.username"));
    assert!(added.contains(&"$.updated_at"));
    assert!(report.only_default_additions());
}

#[test]
fn test_unknown_keys_are_reported_with_paths() {
    let mut value = fixtures::load("post_listing_response.json");
    value["items"][1]["proposalHash"] = json!("0xabc");
    let report = SchemaKind::PostListingResponse.check(&value).unwrap();
    assert_eq!(report.dropped, vec!["$.items[1].proposalHash"]);
}

#[test]
fn test_compare_reports_changed_values() {
    let before = json!({"votes": [{"id": "v-1", "balance": "10"}]});
    let after = json!({"votes": [{"id": "v-1", "balance": "11"}]});
    assert_eq!(compare(&before, &after).changed, vec!["$.votes[0].balance"]);
}
