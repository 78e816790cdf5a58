//! Error types for parsing and applying row operations.
//!
//! Every failure is non-fatal: the engine validates first and only then
//! commits, so an error always leaves the matrix and its history untouched.

use std::fmt;
use thiserror::Error;

/// Usage hint shown when an operation string matches no known form.
pub const OPERATION_USAGE: &str =
    r#"Please use "R1 = R1 + R2", "R1 = R1 * 2", "R1 = R1 / 3", or "R1 <> R2"."#;

/// Coarse classification of a [`RowOpError`], suitable for forwarding to a
/// presentation layer that does not care about the error payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSwapSyntax,
    UnrecognizedOperationSyntax,
    DivisionByZero,
    RowOutOfRange,
    NoMatrixLoaded,
    MalformedRow,
    RaggedMatrix,
    EmptyHistory,
    EmptyMatrix,
    ScaleRowMismatch,
    FractionOperand,
    NumericOverflow,
    FileUnreadable,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::InvalidSwapSyntax => "InvalidSwapSyntax",
            ErrorKind::UnrecognizedOperationSyntax => "UnrecognizedOperationSyntax",
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::RowOutOfRange => "RowOutOfRange",
            ErrorKind::NoMatrixLoaded => "NoMatrixLoaded",
            ErrorKind::MalformedRow => "MalformedRow",
            ErrorKind::RaggedMatrix => "RaggedMatrix",
            ErrorKind::EmptyHistory => "EmptyHistory",
            ErrorKind::EmptyMatrix => "EmptyMatrix",
            ErrorKind::ScaleRowMismatch => "ScaleRowMismatch",
            ErrorKind::FractionOperand => "FractionOperand",
            ErrorKind::NumericOverflow => "NumericOverflow",
            ErrorKind::FileUnreadable => "FileUnreadable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced while building a matrix or applying a row operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowOpError {
    #[error(r#"Invalid row swap operation: {0}. Please use "R1 <> R2"."#)]
    InvalidSwapSyntax(String),

    #[error("Invalid operation format: {0}. {usage}", usage = OPERATION_USAGE)]
    UnrecognizedOperationSyntax(String),

    #[error("Cannot divide a row by zero: {0}")]
    DivisionByZero(String),

    #[error("Row R{row} is out of range (matrix has {row_count} rows)")]
    RowOutOfRange { row: usize, row_count: usize },

    #[error("No matrix loaded")]
    NoMatrixLoaded,

    #[error("Row {row}: '{token}' is not a number")]
    MalformedRow { row: usize, token: String },

    #[error(
        "All rows must have the same number of columns (row {row} has {found}, expected {expected})"
    )]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Nothing to undo")]
    EmptyHistory,

    #[error("Please enter a valid matrix.")]
    EmptyMatrix,

    #[error("Row scaling must assign to the row it reads: R{target} = R{read} (use R{target} = R{target} ...)")]
    ScaleRowMismatch { target: usize, read: usize },

    #[error("Cell R{row}C{column} holds the fraction {value}, which cannot be used as an operand")]
    FractionOperand {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("{0} would leave a value too large to represent")]
    NumericOverflow(String),
}

impl RowOpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RowOpError::InvalidSwapSyntax(_) => ErrorKind::InvalidSwapSyntax,
            RowOpError::UnrecognizedOperationSyntax(_) => ErrorKind::UnrecognizedOperationSyntax,
            RowOpError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            RowOpError::RowOutOfRange { .. } => ErrorKind::RowOutOfRange,
            RowOpError::NoMatrixLoaded => ErrorKind::NoMatrixLoaded,
            RowOpError::MalformedRow { .. } => ErrorKind::MalformedRow,
            RowOpError::RaggedMatrix { .. } => ErrorKind::RaggedMatrix,
            RowOpError::EmptyHistory => ErrorKind::EmptyHistory,
            RowOpError::EmptyMatrix => ErrorKind::EmptyMatrix,
            RowOpError::ScaleRowMismatch { .. } => ErrorKind::ScaleRowMismatch,
            RowOpError::FractionOperand { .. } => ErrorKind::FractionOperand,
            RowOpError::NumericOverflow(_) => ErrorKind::NumericOverflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, RowOpError>;
