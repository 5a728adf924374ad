//! Keypad-driven scientific calculator.
//!
//! The [`calculator`] module holds the core: number formatting across bases,
//! the evaluation engine and the keystroke state machine. [`session`] owns a
//! live state, and [`app`], [`display`] and [`ui`] turn it into a terminal
//! front end.

pub mod app;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod display;
pub mod session;
pub mod ui;
