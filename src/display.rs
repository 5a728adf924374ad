//! What the calculator display shows.
//!
//! A [`DisplaySnapshot`] is derived from a [`CalculatorState`] and holds
//! only presentational text; renderers never look at the state directly.

use serde::Serialize;

use crate::calculator::{CalculatorState, MEMORY_REGISTERS, NumberFormat, format_number};

/// Rendered view of a calculator state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    /// The pending left operand and operator, e.g. `"12 ×"`. Empty when idle.
    pub pending: String,
    /// The main line: the edit buffer, or the error marker.
    pub main: String,
    pub is_error: bool,
    /// Status bar badges, e.g. `["SCI", "DEG", "DEC"]`.
    pub status: Vec<&'static str>,
    /// Active register summary such as `"M2: 4.5"`, only when it is non-zero.
    pub memory: Option<String>,
    pub active_register: usize,
    /// Which registers hold a non-zero value.
    pub registers_in_use: [bool; MEMORY_REGISTERS],
}

impl DisplaySnapshot {
    /// Build the display for `state`.
    ///
    /// With `group_digits`, decimal values get thousands separators (never
    /// in exponential notation or while showing an error).
    pub fn from_state(state: &CalculatorState, group_digits: bool) -> Self {
        let pending = match state.operator {
            Some(op) if !state.previous_input.is_empty() => {
                format!("{} {}", state.previous_input, op)
            }
            _ => String::new(),
        };

        let main = if group_digits
            && !state.is_error
            && state.number_format == NumberFormat::Dec
            && !state.current_input.contains('e')
        {
            group_thousands(&state.current_input)
        } else {
            state.current_input.clone()
        };

        let mut status = Vec::with_capacity(3);
        if state.is_scientific_mode {
            status.push("SCI");
        }
        status.push(state.angle_mode.label());
        status.push(state.number_format.label());

        let active = state.active_register();
        let memory = (active != 0.0).then(|| {
            format!(
                "M{}: {}",
                state.memory_index() + 1,
                format_number(active, NumberFormat::Dec)
            )
        });

        Self {
            pending,
            main,
            is_error: state.is_error,
            status,
            memory,
            active_register: state.memory_index(),
            registers_in_use: state.memory.map(|value| value != 0.0),
        }
    }
}

/// Insert thousands separators into the integer part of a decimal numeral.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Action, MemoryOperation, Operator, reduce_at};

    fn state_after(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::new(), |s, a| reduce_at(s, *a, 0))
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-1234567.891"), "-1,234,567.891");
        assert_eq!(group_thousands("123456."), "123,456.");
    }

    #[test]
    fn test_idle_display() {
        let snapshot = DisplaySnapshot::from_state(&CalculatorState::new(), true);
        assert_eq!(snapshot.pending, "");
        assert_eq!(snapshot.main, "0");
        assert_eq!(snapshot.status, vec!["DEG", "DEC"]);
        assert_eq!(snapshot.memory, None);
        assert_eq!(snapshot.registers_in_use, [false; MEMORY_REGISTERS]);
    }

    #[test]
    fn test_pending_operation_and_grouping() {
        let mut actions: Vec<Action> = "12345".chars().map(Action::Digit).collect();
        actions.push(Action::Operator(Operator::Multiply));
        actions.extend("1000".chars().map(Action::Digit));
        let state = state_after(&actions);

        let snapshot = DisplaySnapshot::from_state(&state, true);
        assert_eq!(snapshot.pending, "12345 ×");
        assert_eq!(snapshot.main, "1,000");

        let plain = DisplaySnapshot::from_state(&state, false);
        assert_eq!(plain.main, "1000");
    }

    #[test]
    fn test_no_grouping_outside_decimal_or_on_error() {
        let hex = CalculatorState {
            current_input: "FFFFF".into(),
            ..CalculatorState::new().with_number_format(NumberFormat::Hex)
        };
        let snapshot = DisplaySnapshot::from_state(&hex, true);
        assert_eq!(snapshot.main, "FFFFF");
        assert_eq!(snapshot.status, vec!["DEG", "HEX"]);

        let exponential = CalculatorState {
            current_input: "1.000000e+16".into(),
            ..CalculatorState::new()
        };
        assert_eq!(DisplaySnapshot::from_state(&exponential, true).main, "1.000000e+16");

        let error = state_after(&[
            Action::Digit('1'),
            Action::Operator(Operator::Divide),
            Action::Digit('0'),
            Action::Equals,
        ]);
        let snapshot = DisplaySnapshot::from_state(&error, true);
        assert!(snapshot.is_error);
        assert_eq!(snapshot.main, "Error");
    }

    #[test]
    fn test_memory_indicator() {
        let state = state_after(&[
            Action::Memory(MemoryOperation::Next),
            Action::Digit('4'),
            Action::Decimal,
            Action::Digit('5'),
            Action::Memory(MemoryOperation::Store),
            Action::ToggleScientificMode,
        ]);
        let snapshot = DisplaySnapshot::from_state(&state, true);
        assert_eq!(snapshot.memory.as_deref(), Some("M2: 4.5"));
        assert_eq!(snapshot.active_register, 1);
        assert_eq!(
            snapshot.registers_in_use,
            [false, true, false, false, false]
        );
        assert_eq!(snapshot.status, vec!["SCI", "DEG", "DEC"]);
    }
}
