//! Matrix cell values.
//!
//! A cell is either a plain number or a display-only fraction produced when a
//! row division is inexact. Fractions are kept exactly as `numerator/divisor`:
//! no GCD reduction and no sign normalization.

use std::fmt;

use super::format::{format_number, parse_number};

/// The content of one matrix cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Fraction { numerator: f64, denominator: f64 },
}

impl Value {
    /// Parse a matrix input token. Returns `None` for non-numeric tokens.
    pub fn from_token(token: &str) -> Option<Value> {
        parse_number(token.trim()).map(Value::Number)
    }

    /// The numeric value, or `None` for a fraction cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Fraction { .. } => None,
        }
    }

    pub fn is_fraction(&self) -> bool {
        matches!(self, Value::Fraction { .. })
    }

    /// Divide `cell` by `divisor`, keeping an exact quotient when the cell is a
    /// multiple of the divisor and falling back to a fraction otherwise.
    pub fn divide(cell: f64, divisor: f64) -> Value {
        if cell % divisor == 0.0 {
            Value::Number(cell / divisor)
        } else {
            Value::Fraction {
                numerator: cell,
                denominator: divisor,
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Fraction {
                numerator,
                denominator,
            } => write!(
                f,
                "{}/{}",
                format_number(*numerator),
                format_number(*denominator)
            ),
        }
    }
}
