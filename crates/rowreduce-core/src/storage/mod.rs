//! Matrix text input and report export.

mod md;
mod parser;

pub use md::{markdown_content, write_markdown};
pub use parser::{MAX_MATRIX_FILE_BYTES, read_matrix_file, split_matrix_text};
