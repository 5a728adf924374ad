//! Keystroke-driven transitions over [`CalculatorState`].
//!
//! [`reduce`] is total: every action yields a new state and failures surface
//! only through `is_error` and the error marker in the edit buffer.
//!
//! Arithmetic is accumulator style. An operator commits whatever operation
//! was already pending, so `2 + 3 × 4 =` evaluates to 20.

use std::fmt;

use chrono::Utc;

use super::engine::{
    AngleMode, CalcError, Operator, ScientificFunction, binary_op, finite, unary_op,
};
use super::format::{NumberFormat, format_number, parse_input};
use super::state::{CalculatorState, ERROR_MARKER, MEMORY_REGISTERS};

/// Memory register operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryOperation {
    /// Zero every register.
    Clear,
    /// Load the active register into the edit buffer.
    Recall,
    Add,
    Subtract,
    /// Overwrite the active register.
    Store,
    /// Select the next register, wrapping around.
    Next,
}

impl MemoryOperation {
    pub const ALL: [Self; 6] = [
        Self::Clear,
        Self::Recall,
        Self::Add,
        Self::Subtract,
        Self::Store,
        Self::Next,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
            Self::Store => "MS",
            Self::Next => "M↓",
        }
    }
}

impl fmt::Display for MemoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Decimal,
    Negate,
    Backspace,
    Operator(Operator),
    Equals,
    Scientific(ScientificFunction),
    Memory(MemoryOperation),
    ClearAll,
    ClearEntry,
    SetAngleMode(AngleMode),
    SetNumberFormat(NumberFormat),
    ToggleScientificMode,
    ClearHistory,
}

/// Apply `action` to `state`, stamping any history record with the current time.
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    reduce_at(state, action, Utc::now().timestamp_millis())
}

/// Apply `action` to `state`, stamping any history record with `timestamp`
/// (milliseconds since the Unix epoch).
pub fn reduce_at(state: CalculatorState, action: Action, timestamp: i64) -> CalculatorState {
    match action {
        Action::Digit('.') => decimal(state),
        Action::Digit(d) => digit(state, d),
        Action::Decimal => decimal(state),
        Action::Negate => negate(state),
        Action::Backspace => backspace(state),
        Action::Operator(op) => operator(state, op, timestamp),
        Action::Equals => equals(state, timestamp),
        Action::Scientific(func) => scientific(state, func, timestamp),
        Action::Memory(op) => memory(state, op),
        Action::ClearAll => clear_all(state),
        Action::ClearEntry => CalculatorState {
            current_input: "0".to_string(),
            is_error: false,
            ..state
        },
        Action::SetAngleMode(angle_mode) => CalculatorState { angle_mode, ..state },
        Action::SetNumberFormat(number_format) => {
            tracing::info!(format = %number_format, "number format changed");
            CalculatorState {
                number_format,
                current_input: "0".to_string(),
                ..state
            }
        }
        Action::ToggleScientificMode => CalculatorState {
            is_scientific_mode: !state.is_scientific_mode,
            ..state
        },
        Action::ClearHistory => CalculatorState {
            history: Vec::new(),
            ..state
        },
    }
}

/// Leave the error state with a fresh `"0"` buffer.
fn clear_error(state: CalculatorState) -> CalculatorState {
    if !state.is_error {
        return state;
    }
    CalculatorState {
        current_input: "0".to_string(),
        is_error: false,
        should_reset_input: false,
        ..state
    }
}

fn enter_error(state: CalculatorState, error: CalcError) -> CalculatorState {
    tracing::debug!(%error, input = %state.current_input, "calculation failed");
    CalculatorState {
        current_input: ERROR_MARKER.to_string(),
        is_error: true,
        ..state
    }
}

fn digit(state: CalculatorState, d: char) -> CalculatorState {
    if !state.number_format.accepts_digit(d) {
        tracing::debug!(digit = %d, format = %state.number_format, "ignoring digit outside base");
        return state;
    }

    let state = clear_error(state);
    let d = d.to_ascii_uppercase();

    if state.should_reset_input {
        return CalculatorState {
            current_input: d.to_string(),
            should_reset_input: false,
            ..state
        };
    }

    // Suppress redundant leading zeros.
    if state.current_input == "0" {
        if d == '0' {
            return state;
        }
        return CalculatorState {
            current_input: d.to_string(),
            ..state
        };
    }

    let mut current_input = state.current_input;
    current_input.push(d);
    CalculatorState {
        current_input,
        ..state
    }
}

fn decimal(state: CalculatorState) -> CalculatorState {
    let state = clear_error(state);

    if !state.number_format.allows_fraction() {
        tracing::debug!(format = %state.number_format, "ignoring decimal point");
        return state;
    }

    if state.should_reset_input {
        return CalculatorState {
            current_input: "0.".to_string(),
            should_reset_input: false,
            ..state
        };
    }

    if state.current_input.contains('.') {
        return state;
    }

    let mut current_input = state.current_input;
    current_input.push('.');
    CalculatorState {
        current_input,
        ..state
    }
}

fn negate(state: CalculatorState) -> CalculatorState {
    if state.is_error || state.current_input == "0" {
        return state;
    }

    let current_input = match state.current_input.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{}", state.current_input),
    };
    CalculatorState {
        current_input,
        ..state
    }
}

fn backspace(state: CalculatorState) -> CalculatorState {
    if state.is_error {
        return CalculatorState {
            current_input: "0".to_string(),
            is_error: false,
            ..state
        };
    }

    let input = &state.current_input;
    let chars = input.chars().count();
    if chars <= 1 || (chars == 2 && input.starts_with('-')) {
        return CalculatorState {
            current_input: "0".to_string(),
            ..state
        };
    }

    let mut current_input = state.current_input;
    current_input.pop();
    CalculatorState {
        current_input,
        ..state
    }
}

/// Evaluate the pending operation, returning the expression and formatted result.
fn evaluate_pending(state: &CalculatorState, op: Operator) -> Result<(String, String), CalcError> {
    let format = state.number_format;
    let a = parse_input(&state.previous_input, format)?;
    let b = parse_input(&state.current_input, format)?;
    let result = binary_op(a, b, op)?;

    let expression = format!("{} {} {}", state.previous_input, op, state.current_input);
    Ok((expression, format_number(result, format)))
}

fn operator(state: CalculatorState, op: Operator, timestamp: i64) -> CalculatorState {
    if state.is_error {
        return state;
    }

    let pending = match state.operator {
        Some(pending) if !state.should_reset_input => pending,
        _ => {
            // Nothing to commit yet: the buffer becomes the left operand.
            return CalculatorState {
                previous_input: state.current_input.clone(),
                operator: Some(op),
                should_reset_input: true,
                ..state
            };
        }
    };

    match evaluate_pending(&state, pending) {
        Ok((expression, result)) => {
            let mut next = CalculatorState {
                current_input: result.clone(),
                previous_input: result.clone(),
                operator: Some(op),
                should_reset_input: true,
                last_operation: expression.clone(),
                ..state
            };
            next.record(expression, result, timestamp);
            next
        }
        Err(error) => enter_error(state, error),
    }
}

fn equals(state: CalculatorState, timestamp: i64) -> CalculatorState {
    let op = match state.operator {
        Some(op) if !state.is_error && !state.previous_input.is_empty() => op,
        _ => return state,
    };

    match evaluate_pending(&state, op) {
        Ok((expression, result)) => {
            let mut next = CalculatorState {
                current_input: result.clone(),
                previous_input: String::new(),
                operator: None,
                should_reset_input: true,
                last_operation: expression.clone(),
                ..state
            };
            next.record(expression, result, timestamp);
            next
        }
        Err(error) => enter_error(state, error),
    }
}

fn scientific(state: CalculatorState, func: ScientificFunction, timestamp: i64) -> CalculatorState {
    if state.is_error {
        return state;
    }

    let format = state.number_format;
    let evaluated = if func.is_constant() {
        unary_op(0.0, func, state.angle_mode)
    } else {
        parse_input(&state.current_input, format)
            .and_then(|value| unary_op(value, func, state.angle_mode))
    };

    match evaluated {
        Ok(value) => {
            let argument = if func.is_constant() {
                ""
            } else {
                state.current_input.as_str()
            };
            let expression = format!("{}({})", func, argument);
            let result = format_number(value, format);

            let mut next = CalculatorState {
                current_input: result.clone(),
                should_reset_input: true,
                last_operation: expression.clone(),
                ..state
            };
            next.record(expression, result, timestamp);
            next
        }
        Err(error) => enter_error(state, error),
    }
}

fn memory(state: CalculatorState, op: MemoryOperation) -> CalculatorState {
    if state.is_error {
        return state;
    }

    let index = state.memory_index;
    match op {
        MemoryOperation::Clear => CalculatorState {
            memory: [0.0; MEMORY_REGISTERS],
            ..state
        },
        MemoryOperation::Recall => match finite(state.active_register()) {
            Ok(value) => CalculatorState {
                current_input: format_number(value, state.number_format),
                should_reset_input: true,
                ..state
            },
            Err(error) => enter_error(state, error),
        },
        MemoryOperation::Next => CalculatorState {
            memory_index: (index + 1) % MEMORY_REGISTERS,
            ..state
        },
        MemoryOperation::Add | MemoryOperation::Subtract | MemoryOperation::Store => {
            let value = match parse_input(&state.current_input, state.number_format) {
                Ok(value) => value,
                Err(error) => return enter_error(state, error),
            };

            let updated = match op {
                MemoryOperation::Add => state.memory[index] + value,
                MemoryOperation::Subtract => state.memory[index] - value,
                _ => value,
            };
            let updated = match finite(updated) {
                Ok(updated) => updated,
                Err(error) => return enter_error(state, error),
            };

            let mut memory = state.memory;
            memory[index] = updated;
            CalculatorState { memory, ..state }
        }
    }
}

fn clear_all(state: CalculatorState) -> CalculatorState {
    tracing::info!("calculator cleared");
    let mut next = CalculatorState::default();
    next.carry_history_ids(&state);
    next
}
