//! Table formatting utilities for CLI output.

/// Truncates a string to at most `max_len` characters, ending in "..." when
/// shortened.
///
/// # Examples
///
/// ```rust
/// use polkassembly_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("post.json", 20), "post.json");
/// assert_eq!(truncate_string("post_listing_response.json", 12), "post_list...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}
