//! Non-interactive mode: load a matrix, run operations, print the result.

use anyhow::Context;
use rowreduce_core::Session;
use std::path::{Path, PathBuf};
use tracing::info;

/// One step given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Apply(String),
    Undo,
}

/// Apply `steps` to the matrix in `matrix_file`, stopping at the first error.
///
/// The final matrix is printed to stdout, one row per line. With `output`, a
/// Markdown report is written there as well.
pub fn run(matrix_file: &Path, steps: &[Step], output: Option<&PathBuf>) -> anyhow::Result<()> {
    let mut session: Session<()> = Session::default();
    session
        .load_matrix_file(matrix_file)
        .with_context(|| format!("loading {}", matrix_file.display()))?;

    for step in steps {
        match step {
            Step::Apply(text) => session.apply(text)?,
            Step::Undo => session.undo()?,
        }
    }
    info!(
        operations = session.document().operation_log().len(),
        "command mode finished"
    );

    print!("{}", render_plain(&session));

    if let Some(path) = output {
        session.document().export_markdown(path)?;
        eprintln!("Result written to {}", path.display());
    }
    Ok(())
}

fn render_plain(session: &Session<()>) -> String {
    let mut out = String::new();
    for row in session.document().snapshot().to_display_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
