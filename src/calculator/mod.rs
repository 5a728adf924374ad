//! Calculator core.
//!
//! This module provides:
//! - Formatting and parsing numbers in decimal, hex, binary and octal
//! - Pure arithmetic and scientific evaluation
//! - The keystroke state machine that drives the display
//! - Keypad label mapping and clipboard copy for front ends

mod clipboard;
mod engine;
mod format;
mod keys;
mod reducer;
mod state;

pub use clipboard::{copy_text, copy_to_clipboard};
pub use engine::{AngleMode, CalcError, Operator, ScientificFunction, binary_op, unary_op};
pub use format::{NumberFormat, format_number, parse_input};
pub use keys::{KeyError, parse_key, parse_keys};
pub use reducer::{Action, MemoryOperation, reduce, reduce_at};
pub use state::{CalculatorState, ERROR_MARKER, HISTORY_LIMIT, HistoryEntry, MEMORY_REGISTERS};
