//! Common helper functions for output formatting.

use chrono::{DateTime, Local, Utc};

/// Number of hex characters shown for a post id in tables.
const ID_DISPLAY_LEN: usize = 8;

/// Truncates an ID for display.
pub fn truncate_id(id: &str) -> String {
    id.chars().take(ID_DISPLAY_LEN).collect()
}

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Collapses line breaks so a post fits on one table row.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Formats a post timestamp in local time.
pub fn format_created(created_at: Option<&DateTime<Utc>>) -> String {
    created_at
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
