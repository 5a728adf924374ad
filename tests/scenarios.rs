//! End-to-end keypad scenarios through the public API.

use calcpro::calculator::{
    Action, AngleMode, CalcError, CalculatorState, ERROR_MARKER, HISTORY_LIMIT, MEMORY_REGISTERS,
    MemoryOperation, NumberFormat, Operator, ScientificFunction, binary_op, format_number,
    parse_input, parse_keys, unary_op,
};
use calcpro::session::Session;

fn session_after(keys: &str) -> Session {
    let mut session = Session::default();
    session.dispatch_all(parse_keys(keys).unwrap());
    session
}

#[test]
fn leading_zero_is_suppressed() {
    let session = session_after("0 5");
    assert_eq!(session.state().current_input, "5");

    let session = session_after("0 0 7 0 1");
    assert_eq!(session.state().current_input, "701");
}

#[test]
fn addition_records_history() {
    let session = session_after("5 + 3 =");
    let state = session.state();
    assert_eq!(state.current_input, "8");
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].expression, "5 + 3");
    assert_eq!(state.history[0].result, "8");
}

#[test]
fn division_by_zero_shows_error() {
    let session = session_after("7 ÷ 0 =");
    assert!(session.state().is_error);
    assert_eq!(session.state().current_input, ERROR_MARKER);
}

#[test]
fn chained_operators_ignore_precedence() {
    let session = session_after("2 + 3 × 4 =");
    assert_eq!(session.state().current_input, "20");
}

#[test]
fn hex_entry_round_trips() {
    let mut session = Session::default();
    session.set_number_format(NumberFormat::Hex);
    session.digit('F');
    session.digit('F');
    session.operator(Operator::Add);
    session.digit('1');
    let state = session.equals();
    assert_eq!(state.current_input, "100");
    assert_eq!(parse_input(&state.current_input, NumberFormat::Hex), Ok(256.0));
    assert_eq!(format_number(256.0, NumberFormat::Hex), "100");
}

#[test]
fn binary_and_octal_arithmetic() {
    let session = session_after("BIN 1 0 1 × 1 1 =");
    assert_eq!(session.state().current_input, "1111");

    let session = session_after("OCT 7 + 1 =");
    assert_eq!(session.state().current_input, "10");
}

#[test]
fn engine_failures() {
    for a in [-1.0, 0.0, 3.5] {
        assert_eq!(binary_op(a, 0.0, Operator::Divide), Err(CalcError::DivisionByZero));
    }
    for mode in [AngleMode::Deg, AngleMode::Rad, AngleMode::Grad] {
        assert!(matches!(
            unary_op(-1.0, ScientificFunction::Sqrt, mode),
            Err(CalcError::DomainError(_))
        ));
    }
}

#[test]
fn history_never_exceeds_limit() {
    let mut session = session_after("1");
    for _ in 0..(HISTORY_LIMIT * 2) {
        session.dispatch_all(parse_keys("+ 1 =").unwrap());
        assert!(session.state().history.len() <= HISTORY_LIMIT);
    }
    let history = &session.state().history;
    assert_eq!(history.len(), HISTORY_LIMIT);
    // Oldest entries were evicted first.
    assert_eq!(history[0].result, (HISTORY_LIMIT * 2 + 1).to_string());
    assert_eq!(history[HISTORY_LIMIT - 1].result, (HISTORY_LIMIT + 2).to_string());
}

#[test]
fn memory_next_cycles_through_all_registers() {
    let mut session = Session::default();
    let mut indices = Vec::new();
    for _ in 0..MEMORY_REGISTERS {
        indices.push(session.memory(MemoryOperation::Next).memory_index());
    }
    assert_eq!(indices, vec![1, 2, 3, 4, 0]);
}

#[test]
fn memory_survives_clear_entry_but_not_clear_all() {
    let mut session = session_after("4 2 MS CE MR");
    assert_eq!(session.state().current_input, "42");
    session.clear_all();
    assert_eq!(session.state().memory, [0.0; MEMORY_REGISTERS]);
}

#[test]
fn scientific_keys_use_angle_mode() {
    let session = session_after("RAD π cos");
    let value: f64 = session.state().current_input.parse().unwrap();
    assert!((value + 1.0).abs() < 1e-10);

    let session = session_after("GRAD 2 0 0 sin");
    let value: f64 = session.state().current_input.parse().unwrap();
    assert!(value.abs() < 1e-10);
}

#[test]
fn error_recovers_on_digit() {
    let mut session = session_after("1 ÷ 0 =");
    let blocked = session.dispatch(Action::Operator(Operator::Add)).clone();
    assert!(blocked.is_error);
    let state = session.digit('6');
    assert!(!state.is_error);
    assert_eq!(state.current_input, "6");
}

#[test]
fn initial_state_is_default() {
    assert_eq!(Session::default().state(), &CalculatorState::new());
}
