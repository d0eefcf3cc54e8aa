//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: outcomes are computed by the handlers.

pub mod report;
pub mod tables;

// Re-export commonly used items
pub use report::{format_check_outcome, print_check_outcome, print_dir_summary};
pub use tables::{print_separator, truncate_string};
