//! Shared output formatting for query commands.

/// Truncate a string with an ellipsis if needed.
///
/// Operates on characters, so snippets with multi-byte text never split
/// mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Collapse whitespace runs so a multi-line snippet stays on one table row.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
