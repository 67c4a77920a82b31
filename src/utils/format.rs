// src/utils/format.rs

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One line of the recent list, numbered from 1.
pub fn format_recent_line(position: usize, value: &str) -> String {
    format!("{:>2}. {}", position + 1, value)
}
