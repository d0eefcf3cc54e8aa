//! Check-dir command handler.
//!
//! Checks every `<kind>[.<label>].json` file directly inside a directory.
//! Files whose stem names no schema kind are skipped.

use std::path::{Path, PathBuf};

use polkassembly_core::SchemaKind;
use tracing::{debug, warn};

use crate::config::CheckConfig;
use crate::error::CliError;
use crate::handlers::check::{CheckOutcome, check_value};
use crate::handlers::read_payload;
use crate::presentation::print_dir_summary;

/// Outcome for one file in the directory.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub kind: SchemaKind,
    /// The check outcome, or the reason the file could not be checked
    pub result: Result<CheckOutcome, String>,
}

impl FileOutcome {
    pub fn passed(&self) -> bool {
        self.result.as_ref().is_ok_and(CheckOutcome::passed)
    }
}

/// All outcomes for a directory, sorted by file name.
#[derive(Debug, Default)]
pub struct DirSummary {
    pub files: Vec<FileOutcome>,
    /// JSON files whose stem did not resolve to a kind
    pub skipped: Vec<PathBuf>,
}

impl DirSummary {
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|file| !file.passed()).count()
    }
}

/// Check every resolvable JSON file in `dir`.
pub fn scan(config: &CheckConfig, dir: &Path) -> Result<DirSummary, CliError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| CliError::Io(format!("{}: {e}", dir.display())))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json")
        })
        .collect();
    paths.sort();

    let mut summary = DirSummary::default();
    for path in paths {
        let Some(kind) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(SchemaKind::resolve_file_stem)
        else {
            debug!(path = %path.display(), "No schema kind for file, skipping");
            summary.skipped.push(path);
            continue;
        };

        let result = read_payload(&path)
            .and_then(|value| check_value(config, kind, &value))
            .map_err(|e| e.to_string());
        if let Err(reason) = &result {
            warn!(path = %path.display(), %reason, "Could not check file");
        }
        summary.files.push(FileOutcome { path, kind, result });
    }
    Ok(summary)
}

/// Execute the check-dir command.
pub fn execute(config: &CheckConfig, dir: &Path) -> Result<(), CliError> {
    let summary = scan(config, dir)?;
    print_dir_summary(&summary);

    if summary.files.is_empty() {
        return Err(CliError::Arguments(format!(
            "no payload files found in {}",
            dir.display()
        )));
    }
    match summary.failures() {
        0 => Ok(()),
        failed => Err(CliError::CheckFailed(format!(
            "{failed} of {} file(s) failed",
            summary.files.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_scan_resolves_kinds_and_skips_others() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "subscription_status.json", r#"{"subscribed": false}"#);
        write(dir.path(), "vote.delegated.json", r#"{"id": "v", "isDelegated": true}"#);
        write(dir.path(), "notes.json", "{}");
        write(dir.path(), "README.md", "# not json");

        let summary = scan(&CheckConfig::new(), dir.path()).unwrap();
        let kinds: Vec<_> = summary.files.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![SchemaKind::SubscriptionStatus, SchemaKind::Vote]);
        assert_eq!(summary.skipped.len(), 1);
        assert!(summary.skipped[0].ends_with("notes.json"));
        assert_eq!(summary.failures(), 0);
    }

    #[test]
    fn test_scan_reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "post.broken.json", "{not json");
        write(dir.path(), "post.extra.json", r#"{"id": "p", "nextCursor": "x"}"#);

        let summary = scan(&CheckConfig::new(), dir.path()).unwrap();
        assert_eq!(summary.failures(), 2);
        assert!(summary.files[0].result.is_err());
        let outcome = summary.files[1].result.as_ref().unwrap();
        assert_eq!(outcome.violations, vec!["unknown key dropped at $.nextCursor"]);
    }

    #[test]
    fn test_execute_fails_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(&CheckConfig::new(), dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_execute_missing_dir() {
        let err = execute(&CheckConfig::new(), Path::new("/nonexistent/fixtures")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
