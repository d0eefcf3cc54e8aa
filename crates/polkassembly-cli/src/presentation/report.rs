//! Fidelity report rendering.

use std::fmt::Write as _;

use crate::handlers::check::CheckOutcome;
use crate::handlers::check_dir::DirSummary;
use crate::presentation::{print_separator, truncate_string};

const fn verdict(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

/// Render one check outcome as a short multi-line block.
pub fn format_check_outcome(label: &str, outcome: &CheckOutcome) -> String {
    let report = &outcome.report;
    let default_added = report.added.iter().filter(|a| a.is_default).count();

    let mut out = format!("{label} ({}): {}\n", outcome.kind, verdict(outcome.passed()));
    let _ = writeln!(
        out,
        "  dropped: {}  added: {} ({} default)  changed: {}",
        report.dropped.len(),
        report.added.len(),
        default_added,
        report.changed.len()
    );
    for reason in &outcome.violations {
        let _ = writeln!(out, "  - {reason}");
    }
    out
}

pub fn print_check_outcome(label: &str, outcome: &CheckOutcome) {
    print!("{}", format_check_outcome(label, outcome));
}

/// Print one row per checked file, then the totals.
pub fn print_dir_summary(summary: &DirSummary) {
    if summary.files.is_empty() {
        println!("No payload files found.");
        return;
    }

    println!(
        "{:<40} {:<28} {:<6} {:>7} {:>5} {:>7}",
        "File", "Kind", "Result", "Dropped", "Added", "Changed"
    );
    print_separator(98);

    for file in &summary.files {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &file.result {
            Ok(outcome) => println!(
                "{:<40} {:<28} {:<6} {:>7} {:>5} {:>7}",
                truncate_string(&name, 39),
                truncate_string(file.kind.name(), 27),
                verdict(outcome.passed()),
                outcome.report.dropped.len(),
                outcome.report.added.len(),
                outcome.report.changed.len()
            ),
            Err(reason) => println!(
                "{:<40} {:<28} {:<6} {}",
                truncate_string(&name, 39),
                truncate_string(file.kind.name(), 27),
                "ERROR",
                reason
            ),
        }
    }

    for file in &summary.files {
        if let Ok(outcome) = &file.result {
            for reason in &outcome.violations {
                println!("  {}: {reason}", file.path.display());
            }
        }
    }

    println!(
        "\n{} checked, {} failed, {} skipped",
        summary.files.len(),
        summary.failures(),
        summary.skipped.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use polkassembly_core::{AddedKey, FidelityReport, SchemaKind};

    #[test]
    fn test_format_passing_outcome() {
        let outcome = CheckOutcome {
            kind: SchemaKind::Comment,
            report: FidelityReport {
                added: vec![AddedKey {
                    path: "$.sentiment".to_string(),
                    is_default: true,
                }],
                ..Default::default()
            },
            violations: Vec::new(),
        };
        let text = format_check_outcome("comment.json", &outcome);
        assert_eq!(
            text,
            "comment.json (comment): PASS\n  dropped: 0  added: 1 (1 default)  changed: 0\n"
        );
    }

    #[test]
    fn test_format_lists_violations() {
        let outcome = CheckOutcome {
            kind: SchemaKind::Post,
            report: FidelityReport {
                dropped: vec!["$.nextCursor".to_string()],
                ..Default::default()
            },
            violations: vec!["unknown key dropped at $.nextCursor".to_string()],
        };
        let text = format_check_outcome("-", &outcome);
        assert!(text.starts_with("- (post): FAIL\n"));
        assert!(text.ends_with("  - unknown key dropped at $.nextCursor\n"));
    }
}
