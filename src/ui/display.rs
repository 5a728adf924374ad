//! Calculator display rendering.
//!
//! Renders the display as a small framed panel:
//! - A status line with mode badges and the active memory register
//! - The pending operation, right-aligned and muted
//! - The current value (or error), right-aligned
//! - One marker per memory register

use crate::calculator::MEMORY_REGISTERS;
use crate::display::DisplaySnapshot;

/// Minimum inner width of the panel.
const MIN_WIDTH: usize = 24;

/// Render a display snapshot as multi-line text.
pub fn render_display(snapshot: &DisplaySnapshot) -> String {
    let status = snapshot.status.join(" ");
    let status_line = match &snapshot.memory {
        Some(memory) => format!("{}  {}", status, memory),
        None => status,
    };

    let main = if snapshot.is_error {
        format!("! {}", snapshot.main)
    } else {
        snapshot.main.clone()
    };

    let markers: String = (0..MEMORY_REGISTERS)
        .map(|i| match (i == snapshot.active_register, snapshot.registers_in_use[i]) {
            (true, true) => '◉',
            (true, false) => '◎',
            (false, true) => '●',
            (false, false) => '○',
        })
        .collect();

    let width = [
        MIN_WIDTH,
        width_of(&status_line),
        width_of(&snapshot.pending),
        width_of(&main),
    ]
    .into_iter()
    .max()
    .unwrap_or(MIN_WIDTH);

    let border = "─".repeat(width + 2);
    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", border));
    out.push_str(&format!("│ {:<width$} │\n", status_line));
    out.push_str(&format!("│ {:>width$} │\n", snapshot.pending));
    out.push_str(&format!("│ {:>width$} │\n", main));
    out.push_str(&format!("│ {:<width$} │\n", markers));
    out.push_str(&format!("└{}┘", border));
    out
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}
