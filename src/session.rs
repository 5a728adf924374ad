//! The calculator session.
//!
//! A session owns the only mutable reference to a [`CalculatorState`] and
//! applies actions to it one at a time. Front ends call one method per
//! keypad action and render the returned snapshot.

use crate::calculator::{
    Action, AngleMode, CalculatorState, MemoryOperation, NumberFormat, Operator,
    ScientificFunction, reduce,
};

/// Single-writer owner of the calculator state.
#[derive(Debug, Default)]
pub struct Session {
    state: CalculatorState,
}

impl Session {
    /// Start a session from an initial state.
    pub fn new(state: CalculatorState) -> Self {
        Self { state }
    }

    /// The current state snapshot.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply one action and return the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);

        tracing::trace!(
            ?action,
            input = %self.state.current_input,
            error = self.state.is_error,
            "action applied"
        );

        &self.state
    }

    /// Apply a sequence of actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &CalculatorState {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    pub fn digit(&mut self, d: char) -> &CalculatorState {
        self.dispatch(Action::Digit(d))
    }

    pub fn decimal(&mut self) -> &CalculatorState {
        self.dispatch(Action::Decimal)
    }

    pub fn negate(&mut self) -> &CalculatorState {
        self.dispatch(Action::Negate)
    }

    pub fn backspace(&mut self) -> &CalculatorState {
        self.dispatch(Action::Backspace)
    }

    pub fn operator(&mut self, op: Operator) -> &CalculatorState {
        self.dispatch(Action::Operator(op))
    }

    pub fn equals(&mut self) -> &CalculatorState {
        self.dispatch(Action::Equals)
    }

    pub fn scientific(&mut self, func: ScientificFunction) -> &CalculatorState {
        self.dispatch(Action::Scientific(func))
    }

    pub fn memory(&mut self, op: MemoryOperation) -> &CalculatorState {
        self.dispatch(Action::Memory(op))
    }

    pub fn clear_all(&mut self) -> &CalculatorState {
        self.dispatch(Action::ClearAll)
    }

    pub fn clear_entry(&mut self) -> &CalculatorState {
        self.dispatch(Action::ClearEntry)
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) -> &CalculatorState {
        self.dispatch(Action::SetAngleMode(mode))
    }

    pub fn set_number_format(&mut self, format: NumberFormat) -> &CalculatorState {
        self.dispatch(Action::SetNumberFormat(format))
    }

    pub fn toggle_scientific_mode(&mut self) -> &CalculatorState {
        self.dispatch(Action::ToggleScientificMode)
    }

    pub fn clear_history(&mut self) -> &CalculatorState {
        self.dispatch(Action::ClearHistory)
    }
}
