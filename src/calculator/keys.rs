//! Keypad labels.
//!
//! Maps the label printed on each calculator button to the [`Action`] it
//! dispatches, so front ends can drive the calculator from plain text.

use thiserror::Error;

use super::engine::{AngleMode, Operator, ScientificFunction};
use super::format::NumberFormat;
use super::reducer::{Action, MemoryOperation};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key '{0}'")]
    Unknown(String),
}

/// Resolve a button label to its action.
///
/// Single characters that are digits in any supported base map to
/// [`Action::Digit`]; whether the digit is accepted is up to the active
/// number format. `C` and `e` keep their keypad meaning (clear-all and the
/// constant), so hex C and E are typed as `c` and `E`. Labels are matched
/// exactly except for a few ASCII spellings (`*`, `/`, `sqrt`, `pi`, `+/-`,
/// `<-`, `Mv`).
pub fn parse_key(label: &str) -> Result<Action, KeyError> {
    let label = label.trim();

    let action = match label {
        "." => Action::Decimal,
        "±" | "+/-" => Action::Negate,
        "⌫" | "<-" => Action::Backspace,
        "=" => Action::Equals,
        "C" => Action::ClearAll,
        "CE" => Action::ClearEntry,
        "CH" => Action::ClearHistory,
        "SCI" => Action::ToggleScientificMode,
        "Mv" => Action::Memory(MemoryOperation::Next),
        "e" => Action::Scientific(ScientificFunction::E),
        _ => {
            if let Some(c) = single_char(label)
                && NumberFormat::Hex.accepts_digit(c)
            {
                Action::Digit(c)
            } else if let Ok(op) = label.parse::<Operator>() {
                Action::Operator(op)
            } else if let Ok(func) = label.parse::<ScientificFunction>() {
                Action::Scientific(func)
            } else if let Some(op) = MemoryOperation::ALL.into_iter().find(|op| op.label() == label)
            {
                Action::Memory(op)
            } else if let Some(mode) = AngleMode::ALL.into_iter().find(|m| m.label() == label) {
                Action::SetAngleMode(mode)
            } else if let Some(format) = NumberFormat::ALL.into_iter().find(|f| f.label() == label)
            {
                Action::SetNumberFormat(format)
            } else {
                return Err(KeyError::Unknown(label.to_string()));
            }
        }
    };

    Ok(action)
}

fn single_char(label: &str) -> Option<char> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Resolve a whitespace-separated sequence of labels.
pub fn parse_keys(line: &str) -> Result<Vec<Action>, KeyError> {
    line.split_whitespace().map(parse_key).collect()
}
