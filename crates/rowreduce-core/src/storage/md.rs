//! Markdown export functionality

use crate::document::Document;
use std::path::Path;

/// Render the current matrix and the operation log as Markdown.
pub fn markdown_content(doc: &Document) -> String {
    let mut out = String::from("# Matrix\n\n");

    match doc.matrix() {
        Some(matrix) if !matrix.is_empty() => {
            out.push_str("|   |");
            for col in 1..=matrix.col_count() {
                out.push_str(&format!(" C{} |", col));
            }
            out.push('\n');

            out.push_str("|---|");
            for _ in 0..matrix.col_count() {
                out.push_str("---|");
            }
            out.push('\n');

            for (i, row) in matrix.rows().iter().enumerate() {
                out.push_str(&format!("| R{} |", i + 1));
                for value in row {
                    out.push_str(&format!(" {} |", value));
                }
                out.push('\n');
            }
        }
        _ => out.push_str("*No matrix loaded*\n"),
    }

    out.push_str("\n## Operations\n\n");
    if doc.operation_log().is_empty() {
        out.push_str("*None*\n");
    } else {
        for (i, op) in doc.operation_log().iter().enumerate() {
            out.push_str(&format!("{}. `{}`\n", i + 1, op));
        }
    }
    out
}

/// Write the Markdown report to a file
pub fn write_markdown(path: &Path, doc: &Document) -> std::io::Result<()> {
    std::fs::write(path, markdown_content(doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_table_and_log() {
        let mut doc = Document::new();
        doc.set_matrix_text("7 9\n1 2").unwrap();
        doc.apply("R1 = R1 / 3").unwrap();

        let md = markdown_content(&doc);
        assert!(md.contains("|   | C1 | C2 |"));
        assert!(md.contains("| R1 | 7/3 | 3 |"));
        assert!(md.contains("| R2 | 1 | 2 |"));
        assert!(md.contains("1. `R1 = R1 / 3`"));
    }

    #[test]
    fn test_markdown_empty_document() {
        let md = markdown_content(&Document::new());
        assert!(md.contains("*No matrix loaded*"));
        assert!(md.contains("*None*"));
    }
}
