//! Types command handler.

use polkassembly_core::SchemaKind;

use crate::error::CliError;
use crate::presentation::print_separator;

/// Kinds in `area`, or all kinds when no area is given.
pub fn list(area: Option<&str>) -> Vec<SchemaKind> {
    SchemaKind::all()
        .filter(|kind| area.is_none_or(|area| kind.area().eq_ignore_ascii_case(area)))
        .collect()
}

/// Execute the types command.
pub fn execute(area: Option<&str>) -> Result<(), CliError> {
    let kinds = list(area);
    if kinds.is_empty() {
        return Err(CliError::Arguments(format!(
            "unknown area '{}'",
            area.unwrap_or_default()
        )));
    }

    println!("{:<15} Kind", "Area");
    print_separator(50);
    for kind in &kinds {
        println!("{:<15} {}", kind.area(), kind);
    }
    println!("\n{} kind(s)", kinds.len());
    Ok(())
}
