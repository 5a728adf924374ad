//! Pure arithmetic and scientific evaluation.
//!
//! Nothing here touches calculator state: the input state machine parses its
//! operands, calls into this module and folds any [`CalcError`] back into its
//! own error flag.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::NumberFormat;

/// Failure of an engine or parse step.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("domain error: {0}")]
    DomainError(&'static str),
    #[error("cannot parse '{input}' as {base}")]
    ParseError { input: String, base: NumberFormat },
    #[error("result is out of range")]
    Overflow,
}

/// A binary operator waiting for its right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    #[serde(rename = "%")]
    Remainder,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
        Self::Power,
    ];

    /// The keypad symbol, also used when writing history expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Remainder => "%",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            _ => Self::ALL
                .into_iter()
                .find(|op| op.symbol() == s)
                .ok_or_else(|| format!("unknown operator '{}'", s)),
        }
    }
}

/// Unit used to interpret trigonometric arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
    Grad,
}

impl AngleMode {
    pub const ALL: [Self; 3] = [Self::Deg, Self::Rad, Self::Grad];

    pub fn label(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
            Self::Grad => "GRAD",
        }
    }

    /// Convert an angle in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Deg => value * PI / 180.0,
            Self::Grad => value * PI / 200.0,
            Self::Rad => value,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown angle mode '{}'", s))
    }
}

/// A single-argument function key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
    Cube,
    Pi,
    E,
    Reciprocal,
    Factorial,
    PowerOfTen,
    ExpE,
    Abs,
    Exp,
    /// Pass-through: returns its argument unchanged.
    Mod,
}

impl ScientificFunction {
    pub const ALL: [Self; 17] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Square,
        Self::Cube,
        Self::Pi,
        Self::E,
        Self::Reciprocal,
        Self::Factorial,
        Self::PowerOfTen,
        Self::ExpE,
        Self::Abs,
        Self::Exp,
        Self::Mod,
    ];

    /// The keypad label, also used when writing history expressions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Pi => "π",
            Self::E => "e",
            Self::Reciprocal => "1/x",
            Self::Factorial => "x!",
            Self::PowerOfTen => "10^x",
            Self::ExpE => "e^x",
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Mod => "mod",
        }
    }

    /// Constants ignore the current value entirely.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScientificFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqrt" => Ok(Self::Sqrt),
            "pi" => Ok(Self::Pi),
            _ => Self::ALL
                .into_iter()
                .find(|func| func.label() == s)
                .ok_or_else(|| format!("unknown function '{}'", s)),
        }
    }
}

/// Apply a binary operator.
pub fn binary_op(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        // Rust's `%` on floats truncates, so the sign follows `a`.
        Operator::Remainder => a % b,
        Operator::Power => a.powf(b),
    };

    finite(result)
}

/// Apply a scientific function, interpreting trig arguments in `angle_mode`.
pub fn unary_op(
    value: f64,
    func: ScientificFunction,
    angle_mode: AngleMode,
) -> Result<f64, CalcError> {
    use ScientificFunction as F;

    let result = match func {
        F::Sin => angle_mode.to_radians(value).sin(),
        F::Cos => angle_mode.to_radians(value).cos(),
        F::Tan => angle_mode.to_radians(value).tan(),
        F::Log => {
            if value <= 0.0 {
                return Err(CalcError::DomainError("logarithm of non-positive number"));
            }
            value.log10()
        }
        F::Ln => {
            if value <= 0.0 {
                return Err(CalcError::DomainError("natural log of non-positive number"));
            }
            value.ln()
        }
        F::Sqrt => {
            if value < 0.0 {
                return Err(CalcError::DomainError("square root of negative number"));
            }
            value.sqrt()
        }
        F::Square => value.powi(2),
        F::Cube => value.powi(3),
        F::Pi => PI,
        F::E => E,
        F::Reciprocal => {
            if value == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            1.0 / value
        }
        F::Factorial => factorial(value)?,
        F::PowerOfTen => 10f64.powf(value),
        F::ExpE | F::Exp => value.exp(),
        F::Abs => value.abs(),
        F::Mod => value,
    };

    finite(result)
}

/// Iterative factorial over non-negative integers.
///
/// Anything past 170! no longer fits in an f64 and is reported as overflow.
fn factorial(value: f64) -> Result<f64, CalcError> {
    if value < 0.0 || value.fract() != 0.0 {
        return Err(CalcError::DomainError(
            "factorial requires non-negative integer",
        ));
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= value {
        result *= i;
        if result.is_infinite() {
            return Err(CalcError::Overflow);
        }
        i += 1.0;
    }

    Ok(result)
}

/// Reject NaN and infinite values.
pub(crate) fn finite(result: f64) -> Result<f64, CalcError> {
    if result.is_nan() {
        Err(CalcError::DomainError("result is not a number"))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(binary_op(5.0, 3.0, Operator::Add), Ok(8.0));
        assert_eq!(binary_op(5.0, 3.0, Operator::Subtract), Ok(2.0));
        assert_eq!(binary_op(5.0, 3.0, Operator::Multiply), Ok(15.0));
        assert_eq!(binary_op(6.0, 3.0, Operator::Divide), Ok(2.0));
        assert_eq!(binary_op(2.0, 10.0, Operator::Power), Ok(1024.0));
    }

    #[test]
    fn test_remainder_sign_follows_dividend() {
        assert_eq!(binary_op(7.0, 3.0, Operator::Remainder), Ok(1.0));
        assert_eq!(binary_op(-7.0, 3.0, Operator::Remainder), Ok(-1.0));
        assert_eq!(binary_op(7.0, -3.0, Operator::Remainder), Ok(1.0));
    }

    #[test]
    fn test_division_by_zero() {
        for a in [0.0, 1.0, -7.5, 1e300] {
            assert_eq!(
                binary_op(a, 0.0, Operator::Divide),
                Err(CalcError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_non_finite_results() {
        assert!(matches!(
            binary_op(1.0, 0.0, Operator::Remainder),
            Err(CalcError::DomainError(_))
        ));
        assert_eq!(
            binary_op(0.0, -1.0, Operator::Power),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            binary_op(1e308, 10.0, Operator::Multiply),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_trig_angle_modes() {
        let sin = |v, mode| unary_op(v, ScientificFunction::Sin, mode).unwrap();
        assert!(approx(sin(90.0, AngleMode::Deg), 1.0));
        assert!(approx(sin(100.0, AngleMode::Grad), 1.0));
        assert!(approx(sin(PI / 2.0, AngleMode::Rad), 1.0));

        let cos = unary_op(180.0, ScientificFunction::Cos, AngleMode::Deg).unwrap();
        assert!(approx(cos, -1.0));
        let tan = unary_op(45.0, ScientificFunction::Tan, AngleMode::Deg).unwrap();
        assert!(approx(tan, 1.0));
    }

    #[test]
    fn test_logarithms() {
        let mode = AngleMode::Deg;
        assert!(approx(unary_op(1000.0, ScientificFunction::Log, mode).unwrap(), 3.0));
        assert!(approx(unary_op(E, ScientificFunction::Ln, mode).unwrap(), 1.0));
        for func in [ScientificFunction::Log, ScientificFunction::Ln] {
            assert!(matches!(unary_op(0.0, func, mode), Err(CalcError::DomainError(_))));
            assert!(matches!(unary_op(-2.0, func, mode), Err(CalcError::DomainError(_))));
        }
    }

    #[test]
    fn test_square_root() {
        for mode in AngleMode::ALL {
            assert_eq!(unary_op(16.0, ScientificFunction::Sqrt, mode), Ok(4.0));
            assert!(matches!(
                unary_op(-1.0, ScientificFunction::Sqrt, mode),
                Err(CalcError::DomainError(_))
            ));
        }
    }

    #[test]
    fn test_powers_and_constants() {
        let mode = AngleMode::Rad;
        assert_eq!(unary_op(3.0, ScientificFunction::Square, mode), Ok(9.0));
        assert_eq!(unary_op(-2.0, ScientificFunction::Cube, mode), Ok(-8.0));
        assert_eq!(unary_op(123.0, ScientificFunction::Pi, mode), Ok(PI));
        assert_eq!(unary_op(123.0, ScientificFunction::E, mode), Ok(E));
        assert!(approx(unary_op(3.0, ScientificFunction::PowerOfTen, mode).unwrap(), 1000.0));
        assert!(approx(unary_op(1.0, ScientificFunction::ExpE, mode).unwrap(), E));
        assert!(approx(unary_op(1.0, ScientificFunction::Exp, mode).unwrap(), E));
        assert_eq!(unary_op(-4.5, ScientificFunction::Abs, mode), Ok(4.5));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(
            unary_op(4.0, ScientificFunction::Reciprocal, AngleMode::Deg),
            Ok(0.25)
        );
        assert_eq!(
            unary_op(0.0, ScientificFunction::Reciprocal, AngleMode::Deg),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_factorial() {
        let fact = |v| unary_op(v, ScientificFunction::Factorial, AngleMode::Deg);
        assert_eq!(fact(0.0), Ok(1.0));
        assert_eq!(fact(1.0), Ok(1.0));
        assert_eq!(fact(5.0), Ok(120.0));
        assert!(fact(170.0).is_ok());
        assert_eq!(fact(171.0), Err(CalcError::Overflow));
        assert!(matches!(fact(-1.0), Err(CalcError::DomainError(_))));
        assert!(matches!(fact(2.5), Err(CalcError::DomainError(_))));
    }

    #[test]
    fn test_mod_passes_through() {
        for v in [0.0, 7.0, -3.25] {
            assert_eq!(unary_op(v, ScientificFunction::Mod, AngleMode::Deg), Ok(v));
        }
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!("√".parse::<ScientificFunction>(), Ok(ScientificFunction::Sqrt));
        assert_eq!("pi".parse::<ScientificFunction>(), Ok(ScientificFunction::Pi));
        assert_eq!("grad".parse::<AngleMode>(), Ok(AngleMode::Grad));
        assert!("sinh".parse::<ScientificFunction>().is_err());
    }
}
