//! Check command handler.
//!
//! Round-trips one payload through its schema kind and judges the fidelity
//! report against the configured policy.

use std::path::Path;

use polkassembly_core::{FidelityReport, SchemaKind};
use serde_json::Value;
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::CliError;
use crate::handlers::read_payload;
use crate::presentation::print_check_outcome;

/// Result of checking one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub kind: SchemaKind,
    pub report: FidelityReport,
    /// Policy violations; empty when the payload passes
    pub violations: Vec<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check `value` as `kind` under `config`.
pub fn check_value(
    config: &CheckConfig,
    kind: SchemaKind,
    value: &Value,
) -> Result<CheckOutcome, CliError> {
    let report = kind.check(value)?;
    debug!(
        kind = kind.name(),
        dropped = report.dropped.len(),
        added = report.added.len(),
        changed = report.changed.len(),
        "Round-trip complete"
    );
    let violations = config.violations(&report);
    Ok(CheckOutcome {
        kind,
        report,
        violations,
    })
}

/// Execute the check command.
///
/// Fails with [`CliError::CheckFailed`] when the payload does not pass.
pub fn execute(config: &CheckConfig, kind: &str, input: &Path) -> Result<(), CliError> {
    let kind: SchemaKind = kind.parse()?;
    let value = read_payload(input)?;
    let outcome = check_value(config, kind, &value)?;

    print_check_outcome(&input.display().to_string(), &outcome);

    if outcome.passed() {
        Ok(())
    } else {
        Err(CliError::CheckFailed(format!(
            "{} failed the {} check ({} issue(s))",
            input.display(),
            kind,
            outcome.violations.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exact_payload_passes() {
        let value = json!({"subscribed": true});
        let outcome =
            check_value(&CheckConfig::new(), SchemaKind::SubscriptionStatus, &value).unwrap();
        assert!(outcome.passed());
        assert!(outcome.report.is_exact());
    }

    #[test]
    fn test_unknown_key_fails_by_default() {
        let value = json!({"subscribed": true, "since": "2024-01-01"});
        let outcome =
            check_value(&CheckConfig::new(), SchemaKind::SubscriptionStatus, &value).unwrap();
        assert!(!outcome.passed());
        assert_eq!(outcome.violations, vec!["unknown key dropped at $.since"]);

        let lenient = CheckConfig::new().with_allow_unknown_keys(true);
        assert!(check_value(&lenient, SchemaKind::SubscriptionStatus, &value)
            .unwrap()
            .passed());
    }

    #[test]
    fn test_type_mismatch_is_payload_error() {
        let value = json!({"subscribed": "yes"});
        let err = check_value(&CheckConfig::new(), SchemaKind::SubscriptionStatus, &value)
            .unwrap_err();
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_execute_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vote.json");
        std::fs::write(&path, r#"{"id": "v1", "voter": "5Grw", "vote": "aye", "extra": 1}"#)
            .unwrap();

        let err = execute(&CheckConfig::new(), "vote", &path).unwrap_err();
        assert!(matches!(err, CliError::CheckFailed(_)));

        let lenient = CheckConfig::new().with_allow_unknown_keys(true);
        execute(&lenient, "vote", &path).unwrap();
    }

    #[test]
    fn test_execute_unknown_kind() {
        let err = execute(&CheckConfig::new(), "ballot", Path::new("-")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
