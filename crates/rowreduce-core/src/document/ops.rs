use super::Document;
use crate::storage::split_matrix_text;
use rowreduce_engine::engine::{Matrix, RowOpError, parse_command};
use tracing::debug;

type OpResult<T> = std::result::Result<T, RowOpError>;

impl Document {
    /// Replace the matrix with one parsed from raw tokens.
    ///
    /// Clears the history and the operation log. On failure the previous
    /// matrix, history and log are kept.
    pub fn set_matrix<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> OpResult<&Matrix> {
        let matrix = Matrix::from_tokens(rows)?;
        debug!(
            rows = matrix.row_count(),
            cols = matrix.col_count(),
            "matrix set"
        );
        self.history.clear();
        self.operation_log.clear();
        Ok(self.matrix.insert(matrix))
    }

    /// Replace the matrix with one parsed from text: newline-separated rows of
    /// whitespace-separated numbers.
    pub fn set_matrix_text(&mut self, text: &str) -> OpResult<&Matrix> {
        let rows = split_matrix_text(text)?;
        self.set_matrix(&rows)
    }

    /// Parse and apply one operation.
    ///
    /// Nothing changes unless the text parses, every row it names exists and
    /// the arithmetic succeeds. Only then is the previous matrix pushed onto
    /// the history and the trimmed text appended to the operation log.
    pub fn apply(&mut self, text: &str) -> OpResult<&Matrix> {
        let Some(current) = self.matrix.as_ref() else {
            return Err(RowOpError::NoMatrixLoaded);
        };
        let text = text.trim();
        let command = parse_command(text)?;
        let next = current.apply(&command)?;

        debug!(%command, depth = self.history.len() + 1, "applied row operation");
        if let Some(previous) = self.matrix.take() {
            self.history.push(previous);
        }
        self.operation_log.push(text.to_string());
        Ok(self.matrix.insert(next))
    }

    /// Restore the matrix from before the most recent operation.
    ///
    /// Returns the log entry that was removed. With nothing to undo this is
    /// `EmptyHistory`, which callers treat as a no-op.
    pub fn undo(&mut self) -> OpResult<String> {
        if self.matrix.is_none() {
            return Err(RowOpError::NoMatrixLoaded);
        }
        let Some(previous) = self.history.pop() else {
            return Err(RowOpError::EmptyHistory);
        };
        self.matrix = Some(previous);
        let entry = self.operation_log.pop().unwrap_or_default();
        debug!(operation = %entry, depth = self.history.len(), "undid row operation");
        Ok(entry)
    }

    /// Drop the matrix, the history and the operation log.
    pub fn reset(&mut self) {
        self.matrix = None;
        self.history.clear();
        self.operation_log.clear();
        debug!("document reset");
    }
}
