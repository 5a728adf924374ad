//! Settings panel rendering.

use crate::calculator::{AngleMode, CalculatorState, NumberFormat};

/// Render the available settings, marking the active choices with brackets.
pub fn render_settings(state: &CalculatorState) -> String {
    let angles = AngleMode::ALL
        .iter()
        .map(|&mode| mark(mode.label(), mode == state.angle_mode))
        .collect::<Vec<_>>()
        .join(" ");
    let formats = NumberFormat::ALL
        .iter()
        .map(|&format| mark(format.label(), format == state.number_format))
        .collect::<Vec<_>>()
        .join(" ");
    let mode = if state.is_scientific_mode {
        "Scientific"
    } else {
        "Standard"
    };

    format!("Mode:   {}\nAngle:  {}\nFormat: {}", mode, angles, formats)
}

fn mark(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        format!(" {} ", label)
    }
}
