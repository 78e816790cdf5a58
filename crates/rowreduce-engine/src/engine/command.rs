//! Row-operation grammar.
//!
//! Operation strings are matched against an ordered list of patterns. The
//! first matcher that recognizes the text decides the outcome, so the order of
//! [`MATCHERS`] is part of the contract:
//!
//! 1. swap: `R1 <> R2`
//! 2. scale: `R1 = R1 * -2`
//! 3. divide: `R1 = R1 / 3`
//! 4. combine: `R1 = R1 - 2R3`, `R2 = R2 + R1`
//!
//! Row numbers are single digits and 1-based in the surface syntax.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::OnceLock;

use super::error::{Result, RowOpError};
use super::format::{format_number, parse_number};

/// A 1-based row number as written by the user (`R3` is `RowRef(3)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowRef(pub usize);

impl RowRef {
    /// Convert to a 0-based index, checking it against the matrix height.
    pub fn index(self, row_count: usize) -> Result<usize> {
        if self.0 >= 1 && self.0 <= row_count {
            Ok(self.0 - 1)
        } else {
            Err(RowOpError::RowOutOfRange {
                row: self.0,
                row_count,
            })
        }
    }
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Operator joining the two source rows of a combine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOperator {
    Add,
    Subtract,
}

impl RowOperator {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            RowOperator::Add => a + b,
            RowOperator::Subtract => a - b,
        }
    }

    fn symbol(self) -> char {
        match self {
            RowOperator::Add => '+',
            RowOperator::Subtract => '-',
        }
    }
}

/// One elementary row operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// `Ri <> Rj`
    Swap { first: RowRef, second: RowRef },
    /// `Ri = Ri * k`
    ScalarMultiply { row: RowRef, scalar: f64 },
    /// `Ri = Ri / k`, `k != 0`
    ScalarDivide { row: RowRef, divisor: f64 },
    /// `Ri = Rj +/- k Rk`, `k` defaults to 1
    RowCombine {
        target: RowRef,
        source_a: RowRef,
        operator: RowOperator,
        scalar: f64,
        source_b: RowRef,
    },
}

impl Command {
    /// Every row the command reads or writes, in surface order.
    pub fn rows(&self) -> Vec<RowRef> {
        match *self {
            Command::Swap { first, second } => vec![first, second],
            Command::ScalarMultiply { row, .. } | Command::ScalarDivide { row, .. } => vec![row],
            Command::RowCombine {
                target,
                source_a,
                source_b,
                ..
            } => vec![target, source_a, source_b],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Swap { first, second } => write!(f, "{} <> {}", first, second),
            Command::ScalarMultiply { row, scalar } => {
                write!(f, "{} = {} * {}", row, row, format_number(scalar))
            }
            Command::ScalarDivide { row, divisor } => {
                write!(f, "{} = {} / {}", row, row, format_number(divisor))
            }
            Command::RowCombine {
                target,
                source_a,
                operator,
                scalar,
                source_b,
            } => {
                write!(f, "{} = {} {} ", target, source_a, operator.symbol())?;
                if scalar != 1.0 {
                    write!(f, "{}", format_number(scalar))?;
                }
                write!(f, "{}", source_b)
            }
        }
    }
}

type Matcher = fn(&str) -> Option<Result<Command>>;

/// Pattern matchers in precedence order. Each returns `None` when the text is
/// not of its form, letting the next matcher try.
pub const MATCHERS: [(&str, Matcher); 4] = [
    ("swap", match_swap),
    ("scale", match_scale),
    ("divide", match_divide),
    ("combine", match_combine),
];

/// Parse an operation string into a [`Command`].
pub fn parse_command(input: &str) -> Result<Command> {
    let text = input.trim();
    MATCHERS
        .iter()
        .find_map(|(_, matcher)| matcher(text))
        .unwrap_or_else(|| Err(RowOpError::UnrecognizedOperationSyntax(text.to_string())))
}

fn swap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^R([0-9])\s*<>\s*R([0-9])$").expect("swap operation regex must compile")
    })
}

fn scale_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^R([0-9])\s*=\s*R([0-9])\s*\*\s*(-?[0-9]+(?:\.[0-9]+)?)$")
            .expect("scale operation regex must compile")
    })
}

fn divide_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^R([0-9])\s*=\s*R([0-9])\s*/\s*(-?[0-9]+(?:\.[0-9]+)?)$")
            .expect("divide operation regex must compile")
    })
}

fn combine_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^R([0-9])\s*=\s*R([0-9])\s*([+-])\s*(-?[0-9]+(?:\.[0-9]+)?)?R([0-9])$")
            .expect("combine operation regex must compile")
    })
}

fn row_at(caps: &Captures<'_>, group: usize) -> RowRef {
    // Groups are single ASCII digits by construction.
    RowRef(caps[group].parse().unwrap_or(0))
}

fn number_at(caps: &Captures<'_>, group: usize, text: &str) -> Result<f64> {
    parse_number(&caps[group])
        .ok_or_else(|| RowOpError::UnrecognizedOperationSyntax(text.to_string()))
}

fn match_swap(text: &str) -> Option<Result<Command>> {
    if !text.contains("<>") {
        return None;
    }
    let result = match swap_re().captures(text) {
        Some(caps) => Ok(Command::Swap {
            first: row_at(&caps, 1),
            second: row_at(&caps, 2),
        }),
        None => Err(RowOpError::InvalidSwapSyntax(text.to_string())),
    };
    Some(result)
}

/// Scale and divide must assign to the row they read.
fn same_row(caps: &Captures<'_>) -> Result<RowRef> {
    let target = row_at(caps, 1);
    let source = row_at(caps, 2);
    if target == source {
        Ok(target)
    } else {
        Err(RowOpError::ScaleRowMismatch {
            target: target.0,
            read: source.0,
        })
    }
}

fn match_scale(text: &str) -> Option<Result<Command>> {
    let caps = scale_re().captures(text)?;
    Some(build_scale(&caps, text))
}

fn build_scale(caps: &Captures<'_>, text: &str) -> Result<Command> {
    let row = same_row(caps)?;
    let scalar = number_at(caps, 3, text)?;
    Ok(Command::ScalarMultiply { row, scalar })
}

fn match_divide(text: &str) -> Option<Result<Command>> {
    let caps = divide_re().captures(text)?;
    Some(build_divide(&caps, text))
}

fn build_divide(caps: &Captures<'_>, text: &str) -> Result<Command> {
    let row = same_row(caps)?;
    let divisor = number_at(caps, 3, text)?;
    if divisor == 0.0 {
        return Err(RowOpError::DivisionByZero(text.to_string()));
    }
    Ok(Command::ScalarDivide { row, divisor })
}

fn match_combine(text: &str) -> Option<Result<Command>> {
    let caps = combine_re().captures(text)?;
    Some(build_combine(&caps, text))
}

fn build_combine(caps: &Captures<'_>, text: &str) -> Result<Command> {
    let operator = if &caps[3] == "+" {
        RowOperator::Add
    } else {
        RowOperator::Subtract
    };
    let scalar = match caps.get(4) {
        Some(_) => number_at(caps, 4, text)?,
        None => 1.0,
    };
    Ok(Command::RowCombine {
        target: row_at(caps, 1),
        source_a: row_at(caps, 2),
        operator,
        scalar,
        source_b: row_at(caps, 5),
    })
}
