//! Schema kinds resolved from fixture names and dispatched at runtime.

mod common;

use common::fixtures;
use polkassembly::{CodecError, SchemaKind};

#[test]
fn test_every_area_has_a_fixture() {
    let covered: std::collections::HashSet<&str> = fixtures::all()
        .into_iter()
        .map(|(_, kind, _)| kind.area())
        .collect();
    for area in [
        "common",
        "auth",
        "posts",
        "comments",
        "votes",
        "actions",
        "users",
        "preimages",
        "cart",
        "delegation",
        "treasury",
        "tips",
        "discussions",
        "polls",
        "notifications",
        "analytics",
        "search",
        "timeline",
    ] {
        assert!(covered.contains(area), "no fixture for area {area}");
    }
}

#[test]
fn test_labelled_fixture_names_resolve() {
    assert_eq!(
        SchemaKind::resolve_file_stem("comment.thread"),
        Some(SchemaKind::Comment)
    );
    assert_eq!(
        SchemaKind::resolve_file_stem("add_comment_request.reply"),
        Some(SchemaKind::AddCommentRequest)
    );
}

#[test]
fn test_wrong_kind_is_a_decode_error() {
    let value = fixtures::load("poll.json");
    let err = SchemaKind::Vote.check(&value).unwrap_err();
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn test_names_are_unique() {
    let mut names: Vec<&str> = SchemaKind::all().map(SchemaKind::name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}
