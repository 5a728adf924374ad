//! Conversion between numeric values and their display text.
//!
//! Each [`NumberFormat`] selects a radix. Decimal keeps fractional values and
//! falls back to exponential notation for very large or very small
//! magnitudes; the other bases render integers only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine::CalcError;

/// Magnitude above which decimal output switches to exponential notation.
const EXPONENTIAL_ABOVE: f64 = 1e15;
/// Magnitude below which (non-zero) decimal output switches to exponential notation.
const EXPONENTIAL_BELOW: f64 = 1e-6;
/// Fractional digits kept in exponential notation.
const EXPONENTIAL_DIGITS: usize = 6;

/// The base used to display and parse numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NumberFormat {
    #[default]
    Dec,
    Hex,
    Bin,
    Oct,
}

impl NumberFormat {
    pub const ALL: [Self; 4] = [Self::Dec, Self::Hex, Self::Bin, Self::Oct];

    /// The radix of this format.
    pub fn radix(self) -> u32 {
        match self {
            Self::Dec => 10,
            Self::Hex => 16,
            Self::Bin => 2,
            Self::Oct => 8,
        }
    }

    /// Short uppercase label, as shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dec => "DEC",
            Self::Hex => "HEX",
            Self::Bin => "BIN",
            Self::Oct => "OCT",
        }
    }

    /// Check whether `c` is a digit in this base.
    ///
    /// Hex digits are accepted in either case.
    pub fn accepts_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }

    /// Whether numbers in this format can carry a fractional part.
    pub fn allows_fraction(self) -> bool {
        self == Self::Dec
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NumberFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown number format '{}'", s))
    }
}

/// Format a value for display in the given base.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Dec => format_decimal(value),
        _ => format_integer(round_half_up(value), format),
    }
}

/// Parse display text back into a value in the given base.
///
/// Decimal accepts a floating-point literal (including the exponential form
/// produced by [`format_number`]); other bases accept a signed integer
/// literal without prefix.
pub fn parse_input(text: &str, format: NumberFormat) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    let parse_error = || CalcError::ParseError {
        input: text.to_string(),
        base: format,
    };

    match format {
        NumberFormat::Dec => {
            // Reject the "inf"/"nan" spellings that f64::from_str would accept.
            let well_formed = !trimmed.is_empty()
                && trimmed.chars().any(|c| c.is_ascii_digit())
                && trimmed
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
            if !well_formed {
                return Err(parse_error());
            }
            trimmed.parse::<f64>().map_err(|_| parse_error())
        }
        _ => i128::from_str_radix(trimmed, format.radix())
            .map(|n| n as f64)
            .map_err(|_| parse_error()),
    }
}

fn format_decimal(value: f64) -> String {
    // Also folds -0 into "0".
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude > EXPONENTIAL_ABOVE || magnitude < EXPONENTIAL_BELOW {
        format_exponential(value)
    } else {
        value.to_string()
    }
}

/// Render as `d.dddddde+x`, always signing the exponent.
fn format_exponential(value: f64) -> String {
    let raw = format!("{:.*e}", EXPONENTIAL_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => raw,
    }
}

fn format_integer(value: f64, format: NumberFormat) -> String {
    // Saturating cast: out-of-range magnitudes clamp to the i128 bounds.
    let n = value as i128;
    let sign = if n < 0 { "-" } else { "" };
    let magnitude = n.unsigned_abs();

    let digits = match format {
        NumberFormat::Hex => format!("{:X}", magnitude),
        NumberFormat::Bin => format!("{:b}", magnitude),
        NumberFormat::Oct => format!("{:o}", magnitude),
        NumberFormat::Dec => magnitude.to_string(),
    };

    format!("{}{}", sign, digits)
}

/// Round to the nearest integer, with halves going towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
