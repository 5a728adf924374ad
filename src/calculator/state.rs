//! The calculator state aggregate.

use serde::Serialize;

use super::engine::{AngleMode, Operator};
use super::format::NumberFormat;

/// Number of independent memory registers.
pub const MEMORY_REGISTERS: usize = 5;
/// Maximum number of history entries kept, newest first.
pub const HISTORY_LIMIT: usize = 50;
/// Text shown in the edit buffer while in the error state.
pub const ERROR_MARKER: &str = "Error";

/// A completed calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Unique within a session, increasing with every record.
    pub id: u64,
    /// The expression as typed, e.g. `5 + 3` or `sin(30)`.
    pub expression: String,
    /// The formatted result.
    pub result: String,
    /// Wall-clock time of the calculation, in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Everything the display needs to render, and everything a transition reads.
///
/// Transitions in [`super::reducer`] consume a state and return the next one;
/// nothing mutates a state that has already been handed out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    /// The live edit buffer. Never empty.
    pub current_input: String,
    /// Left operand text while an operator is pending, otherwise empty.
    pub previous_input: String,
    pub operator: Option<Operator>,
    /// The next digit starts a fresh buffer instead of appending.
    pub should_reset_input: bool,
    pub memory: [f64; MEMORY_REGISTERS],
    /// Active register, always `< MEMORY_REGISTERS`.
    pub(crate) memory_index: usize,
    pub is_scientific_mode: bool,
    pub angle_mode: AngleMode,
    pub number_format: NumberFormat,
    pub is_error: bool,
    /// Newest first, at most [`HISTORY_LIMIT`] entries.
    pub history: Vec<HistoryEntry>,
    pub last_operation: String,
    #[serde(skip)]
    pub(crate) next_history_id: u64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_input: String::new(),
            operator: None,
            should_reset_input: false,
            memory: [0.0; MEMORY_REGISTERS],
            memory_index: 0,
            is_scientific_mode: false,
            angle_mode: AngleMode::default(),
            number_format: NumberFormat::default(),
            is_error: false,
            history: Vec::new(),
            last_operation: String::new(),
            next_history_id: 1,
        }
    }
}

impl CalculatorState {
    /// Create a state with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in scientific mode (or not).
    pub fn with_scientific_mode(mut self, enabled: bool) -> Self {
        self.is_scientific_mode = enabled;
        self
    }

    /// Start with the given angle mode.
    pub fn with_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// Start with the given number format.
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Index of the active memory register.
    pub fn memory_index(&self) -> usize {
        self.memory_index
    }

    /// The value held by the active memory register.
    pub fn active_register(&self) -> f64 {
        self.memory[self.memory_index]
    }

    /// Look up a history entry by id.
    pub fn history_entry(&self, id: u64) -> Option<&HistoryEntry> {
        self.history.iter().find(|entry| entry.id == id)
    }

    /// Keep history ids unique across a reset.
    pub(crate) fn carry_history_ids(&mut self, previous: &Self) {
        self.next_history_id = previous.next_history_id;
    }

    /// Prepend a history record, evicting the oldest past [`HISTORY_LIMIT`].
    pub(crate) fn record(&mut self, expression: String, result: String, timestamp: i64) {
        let entry = HistoryEntry {
            id: self.next_history_id,
            expression,
            result,
            timestamp,
        };
        self.next_history_id += 1;

        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
    }
}
