use super::Document;
use crate::error::Result;
use crate::storage::{read_matrix_file, write_markdown};
use rowreduce_engine::engine::Matrix;
use std::path::Path;
use tracing::info;

impl Document {
    /// Load a matrix from a text file (same format as typed input).
    ///
    /// Transactional: an unreadable or invalid file leaves the document as is.
    pub fn load_matrix_file(&mut self, path: &Path) -> Result<&Matrix> {
        let content = read_matrix_file(path)?;
        info!(path = %path.display(), "loading matrix file");
        Ok(self.set_matrix_text(&content)?)
    }

    /// Export the matrix and operation log as a Markdown report.
    pub fn export_markdown(&self, path: &Path) -> Result<()> {
        write_markdown(path, self)?;
        info!(path = %path.display(), "exported markdown report");
        Ok(())
    }
}
