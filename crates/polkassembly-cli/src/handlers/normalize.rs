//! Normalize command handler.
//!
//! Prints the canonical encoding of a payload: the schema's key set, legacy
//! aliases included, with unknown keys removed.

use std::path::Path;

use polkassembly_core::SchemaKind;
use serde_json::Value;

use crate::config::CheckConfig;
use crate::error::CliError;
use crate::handlers::read_payload;

/// Decode `value` as `kind` and render it again.
pub fn normalize_value(kind: SchemaKind, value: &Value, pretty: bool) -> Result<String, CliError> {
    let canonical = kind.roundtrip(value)?;
    let text = if pretty {
        serde_json::to_string_pretty(&canonical)?
    } else {
        serde_json::to_string(&canonical)?
    };
    Ok(text)
}

/// Execute the normalize command.
pub fn execute(config: &CheckConfig, kind: &str, input: &Path) -> Result<(), CliError> {
    let kind: SchemaKind = kind.parse()?;
    let value = read_payload(input)?;
    println!("{}", normalize_value(kind, &value, config.pretty)?);
    Ok(())
}
