//! Copying display values to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

use super::state::CalculatorState;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")
}

/// The text a copy action should place on the clipboard.
///
/// Returns the history result for `history_id` when given, otherwise the
/// current edit buffer. Nothing is copied while the calculator shows an error.
pub fn copy_text(state: &CalculatorState, history_id: Option<u64>) -> Option<&str> {
    match history_id {
        Some(id) => state.history_entry(id).map(|entry| entry.result.as_str()),
        None if state.is_error => None,
        None => Some(&state.current_input),
    }
}
