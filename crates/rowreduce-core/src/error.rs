//! Error types for Rowreduce core.

use thiserror::Error;

use rowreduce_engine::engine::{ErrorKind, RowOpError};

/// Errors that can occur while loading, editing or exporting a document
#[derive(Error, Debug)]
pub enum RowReduceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    RowOp(#[from] RowOpError),
}

impl RowReduceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RowReduceError::Io(_) => ErrorKind::FileUnreadable,
            RowReduceError::RowOp(err) => err.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RowReduceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_have_their_own_kind() {
        let err = RowReduceError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::FileUnreadable);
        let err = RowReduceError::from(RowOpError::EmptyMatrix);
        assert_eq!(err.kind(), ErrorKind::EmptyMatrix);
    }
}
