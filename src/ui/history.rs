//! History panel rendering.

use chrono::{DateTime, Local};

use crate::calculator::HistoryEntry;

/// Render the history log, newest first.
pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No calculations yet".to_string();
    }

    history
        .iter()
        .map(|entry| {
            format!(
                "#{:<4} {}  {} = {}",
                entry.id,
                format_time(entry.timestamp),
                entry.expression,
                entry.result
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Local wall-clock time of a history timestamp.
fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
