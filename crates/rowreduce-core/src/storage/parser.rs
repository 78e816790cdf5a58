//! Parser for matrix text input.
//!
//! Format: one row per line, cells separated by whitespace.
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! ```

use crate::error::{Result, RowReduceError};
use rowreduce_engine::engine::RowOpError;
use std::path::Path;

pub const MAX_MATRIX_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Split matrix text into rows of raw tokens.
///
/// Blank lines are skipped. Tokens are not validated here; numeric parsing
/// and the rectangular check happen when the matrix is built.
pub fn split_matrix_text(text: &str) -> std::result::Result<Vec<Vec<&str>>, RowOpError> {
    let rows: Vec<Vec<&str>> = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();
    if rows.is_empty() {
        return Err(RowOpError::EmptyMatrix);
    }
    Ok(rows)
}

/// Read a matrix text file, refusing anything larger than
/// [`MAX_MATRIX_FILE_BYTES`].
pub fn read_matrix_file(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_MATRIX_FILE_BYTES {
        return Err(RowReduceError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Refusing to read {}: matrix file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_MATRIX_FILE_BYTES
            ),
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}
