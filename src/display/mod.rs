//! Display formatting for terminal output
//!
//! Provides helpers shared by the reports and the event table used by
//! `expenses list`.

pub mod event;

pub use event::format_event_table;

/// Format an amount in euros with two decimals, e.g. `-12.50€`
pub fn format_euros(amount: f64) -> String {
    format!("{:.2}€", amount)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
