//! Application state and logic.
//!
//! [`App`] holds the [`Session`] plus everything that only matters on screen:
//! the two input buffers, which one has focus, and the help modal. The
//! session's observer is a [`View`], a render-ready copy of the state that the
//! UI draws from.

use rowreduce_core::storage::read_matrix_file;
use rowreduce_core::{ErrorKind, Matrix, Session, SessionObserver};
use std::path::Path;

use super::timer::Timer;
use crate::config::Config;

/// Which input receives typed characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Multi-line matrix entry.
    MatrixInput,
    /// Single-line operation entry.
    Operation,
}

/// Last message for the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(ErrorKind, String),
}

/// Presentation-side copy of the session state, kept current by the
/// session's callbacks.
#[derive(Debug, Default)]
pub struct View {
    pub matrix: Matrix,
    pub log: Vec<String>,
    pub timer: Timer,
    pub notice: Option<Notice>,
}

impl SessionObserver for View {
    fn on_matrix_changed(&mut self, matrix: &Matrix) {
        self.matrix = matrix.clone();
    }

    fn on_matrix_ready(&mut self, matrix: &Matrix) {
        self.log.clear();
        self.timer.start();
        self.notice = Some(Notice::Info(format!(
            "Matrix set: {}x{}",
            matrix.row_count(),
            matrix.col_count()
        )));
    }

    fn on_reset(&mut self) {
        self.log.clear();
        self.timer.stop();
        self.notice = Some(Notice::Info("Reset".to_string()));
    }

    fn on_operation_logged(&mut self, text: &str) {
        self.log.push(text.to_string());
        self.notice = None;
    }

    fn on_operation_log_removed(&mut self) {
        if let Some(entry) = self.log.pop() {
            self.notice = Some(Notice::Info(format!("Undid {}", entry)));
        }
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        self.notice = Some(Notice::Error(kind, message.to_string()));
    }
}

pub struct App {
    pub session: Session<View>,
    pub focus: Focus,
    /// Matrix input text (rows on lines)
    pub matrix_input: String,
    /// Cursor position within matrix input (byte offset)
    pub matrix_cursor: usize,
    /// Operation input text
    pub operation_input: String,
    /// Cursor position within operation input (byte offset)
    pub operation_cursor: usize,
    pub help_modal: bool,
    pub help_scroll: u16,
    /// Width of each matrix column
    pub col_width: u16,
    pub show_timer: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            session: Session::new(View::default()),
            focus: Focus::MatrixInput,
            matrix_input: String::new(),
            matrix_cursor: 0,
            operation_input: String::new(),
            operation_cursor: 0,
            help_modal: false,
            help_scroll: 0,
            col_width: config.col_width,
            show_timer: config.show_timer,
        }
    }

    /// Create the app with a matrix loaded from `path`. The file content also
    /// becomes the matrix input text so it can be edited and set again.
    pub fn with_matrix_file(path: &Path, config: &Config) -> rowreduce_core::Result<Self> {
        let content = read_matrix_file(path)?;
        let mut app = Self::new(config);
        app.session.set_matrix_text(&content)?;
        app.matrix_input = content.trim().to_string();
        app.matrix_cursor = app.matrix_input.len();
        app.focus = Focus::Operation;
        Ok(app)
    }

    pub fn view(&self) -> &View {
        self.session.observer()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::MatrixInput => Focus::Operation,
            Focus::Operation => Focus::MatrixInput,
        };
    }

    /// Set the matrix from the matrix input; focus moves to the operation
    /// input on success.
    pub fn set_matrix(&mut self) {
        if self.session.set_matrix_text(&self.matrix_input).is_ok() {
            self.focus = Focus::Operation;
        }
    }

    pub fn insert_newline(&mut self) {
        if self.focus == Focus::MatrixInput {
            self.matrix_input.insert(self.matrix_cursor, '\n');
            self.matrix_cursor += 1;
        }
    }

    /// Apply the operation input. The input is cleared whether or not the
    /// operation succeeds; blank input is ignored.
    pub fn submit_operation(&mut self) {
        let text = self.operation_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let _ = self.session.apply(&text);
        self.operation_input.clear();
        self.operation_cursor = 0;
    }

    pub fn undo(&mut self) {
        let _ = self.session.undo();
    }

    /// Clear the session and the matrix input.
    pub fn reset(&mut self) {
        self.session.reset();
        self.matrix_input.clear();
        self.matrix_cursor = 0;
        self.operation_input.clear();
        self.operation_cursor = 0;
        self.focus = Focus::MatrixInput;
    }

    pub fn open_help(&mut self) {
        self.help_modal = true;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.help_modal = false;
    }

    pub fn scroll_help_by(&mut self, delta: i16) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
    }
}
