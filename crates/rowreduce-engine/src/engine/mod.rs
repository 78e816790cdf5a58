//! Row-reduction engine API.
//!
//! This module provides the computation core of the calculator:
//!
//! - [`Value`] - Matrix cell (number or display-only fraction)
//! - [`Matrix`] - Rectangular matrix and per-command arithmetic
//! - [`Command`], [`RowRef`] - Typed row operations
//! - [`parse_command`] - Operation grammar (`R1 <> R2`, `R1 = R1 * 2`, ...)
//! - [`RowOpError`], [`ErrorKind`] - Failures, all non-fatal
//! - [`format_number`] - Format numbers for display

mod command;
mod error;
mod format;
mod matrix;
mod value;

pub use command::{Command, MATCHERS, RowOperator, RowRef, parse_command};
pub use error::{ErrorKind, OPERATION_USAGE, Result, RowOpError};
pub use format::{format_number, parse_number};
pub use matrix::Matrix;
pub use value::Value;
