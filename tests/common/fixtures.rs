//! JSON fixtures captured from the API.
//!
//! Fixture files are named `<kind>[.<label>].json`, where `<kind>` is a
//! schema kind in snake_case.

#![allow(dead_code)]

use std::path::PathBuf;

use polkassembly::{FidelityReport, SchemaKind, fidelity};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Directory holding the fixture files.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load one fixture by file name (without directory).
pub fn load(name: &str) -> Value {
    let path = fixtures_dir().join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("{name} is not JSON: {e}"))
}

/// Decode a fixture as `T`.
pub fn decode<T: DeserializeOwned>(name: &str) -> T {
    serde_json::from_value(load(name)).unwrap_or_else(|e| panic!("{name} does not decode: {e}"))
}

/// Round-trip a fixture through `T`.
pub fn check<T: DeserializeOwned + Serialize>(name: &str) -> FidelityReport {
    fidelity::check::<T>(&load(name)).unwrap_or_else(|e| panic!("{name}: {e}"))
}

/// Every fixture with the kind its file name resolves to, sorted by name.
pub fn all() -> Vec<(String, SchemaKind, Value)> {
    let mut names: Vec<String> = std::fs::read_dir(fixtures_dir())
        .expect("fixtures directory exists")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let stem = name.trim_end_matches(".json");
            let kind = SchemaKind::resolve_file_stem(stem)
                .unwrap_or_else(|| panic!("{name} does not name a schema kind"));
            let value = load(&name);
            (name, kind, value)
        })
        .collect()
}
