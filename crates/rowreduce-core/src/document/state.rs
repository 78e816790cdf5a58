use rowreduce_engine::engine::Matrix;

/// UI-agnostic state of one row-reduction session.
///
/// The document exclusively owns the live matrix together with the undo
/// history and the operation log. Callers only ever see shared borrows or
/// clones, never a mutable reference.
///
/// Invariants:
/// - `history.len() == operation_log.len()`
/// - `history.last()` is the matrix as it was right before the most recent
///   applied operation
///
/// The document is not internally synchronized; callers serialize access.
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// Live matrix, `None` until a matrix is set (and again after reset)
    pub(crate) matrix: Option<Matrix>,
    /// Snapshots pushed before each applied operation (LIFO)
    pub(crate) history: Vec<Matrix>,
    /// Operation text, one entry per applied operation
    pub(crate) operation_log: Vec<String>,
}

impl Document {
    /// Create an empty document (no matrix loaded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a matrix is loaded and operations may be applied.
    pub fn is_ready(&self) -> bool {
        self.matrix.is_some()
    }

    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    /// Copy of the current matrix for rendering. Empty when nothing is loaded.
    pub fn snapshot(&self) -> Matrix {
        self.matrix.clone().unwrap_or_default()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn operation_log(&self) -> &[String] {
        &self.operation_log
    }
}
