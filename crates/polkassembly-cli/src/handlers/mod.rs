//! Command handlers.
//!
//! Each handler splits into a pure part that computes an outcome (tested
//! directly) and an `execute` wrapper that prints it and maps failures to
//! [`CliError`].

pub mod check;
pub mod check_dir;
pub mod config;
pub mod normalize;
pub mod types;

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::CliError;

/// Read a JSON payload from `input`, or from stdin when `input` is `-`.
pub fn read_payload(input: &Path) -> Result<Value, CliError> {
    let text = if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| CliError::Io(format!("{}: {e}", input.display())))?
    };
    parse_payload(&text)
}

/// Parse payload text, rejecting blank input.
pub fn parse_payload(text: &str) -> Result<Value, CliError> {
    if text.trim().is_empty() {
        return Err(CliError::Payload("input is empty".to_string()));
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let value = parse_payload(r#"{"id": "x"}"#).unwrap();
        assert_eq!(value["id"], "x");
    }

    #[test]
    fn test_parse_blank_payload() {
        assert!(matches!(parse_payload("  \n"), Err(CliError::Payload(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_payload(Path::new("/nonexistent/post.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(msg) if msg.contains("post.json")));
    }
}
