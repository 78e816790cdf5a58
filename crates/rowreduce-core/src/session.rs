//! Session controller.
//!
//! A [`Session`] owns a [`Document`] and forwards every state change to a
//! [`SessionObserver`], which is how a presentation layer learns what to
//! render. The document itself knows nothing about observers, so it can be
//! driven and tested headlessly.
//!
//! Every public operation runs to completion before returning. Failures are
//! reported both to the observer (`on_error`) and to the caller, and never
//! change state.

use crate::document::Document;
use crate::error::Result;
use rowreduce_engine::engine::{ErrorKind, Matrix, RowOpError};
use std::path::Path;
use tracing::debug;

type OpResult<T> = std::result::Result<T, RowOpError>;

/// Callbacks from a [`Session`] to its presentation layer.
///
/// All methods default to doing nothing.
pub trait SessionObserver {
    /// The matrix changed (set, apply, undo or reset). Receives a borrow of
    /// the new state; clone it to keep it.
    fn on_matrix_changed(&mut self, _matrix: &Matrix) {}

    /// A new matrix was set. Fired before `on_matrix_changed`.
    fn on_matrix_ready(&mut self, _matrix: &Matrix) {}

    /// The session was reset. Fired before `on_matrix_changed`.
    fn on_reset(&mut self) {}

    /// An operation was applied; `text` is the trimmed input.
    fn on_operation_logged(&mut self, _text: &str) {}

    /// The most recent operation was undone.
    fn on_operation_log_removed(&mut self) {}

    /// An operation failed. State is unchanged.
    fn on_error(&mut self, _kind: ErrorKind, _message: &str) {}
}

impl SessionObserver for () {}

pub struct Session<O: SessionObserver> {
    document: Document,
    observer: O,
}

impl<O: SessionObserver> Session<O> {
    pub fn new(observer: O) -> Self {
        Session {
            document: Document::new(),
            observer,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Set the matrix from raw tokens, one inner sequence per row.
    pub fn set_matrix<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> OpResult<()> {
        match self.document.set_matrix(rows) {
            Ok(matrix) => {
                self.observer.on_matrix_ready(matrix);
                self.observer.on_matrix_changed(matrix);
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Set the matrix from text (rows on lines, cells separated by spaces).
    pub fn set_matrix_text(&mut self, text: &str) -> OpResult<()> {
        match self.document.set_matrix_text(text) {
            Ok(matrix) => {
                self.observer.on_matrix_ready(matrix);
                self.observer.on_matrix_changed(matrix);
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Load a matrix file. I/O failures are reported as `FileUnreadable`.
    pub fn load_matrix_file(&mut self, path: &Path) -> Result<()> {
        match self.document.load_matrix_file(path) {
            Ok(matrix) => {
                self.observer.on_matrix_ready(matrix);
                self.observer.on_matrix_changed(matrix);
                Ok(())
            }
            Err(err) => {
                let kind = err.kind();
                debug!(%kind, error = %err, "matrix file rejected");
                self.observer.on_error(kind, &err.to_string());
                Err(err)
            }
        }
    }

    /// Parse and apply one operation string.
    pub fn apply(&mut self, text: &str) -> OpResult<()> {
        match self.document.apply(text) {
            Ok(matrix) => {
                self.observer.on_matrix_changed(matrix);
                if let Some(entry) = self.document.operation_log().last() {
                    self.observer.on_operation_logged(entry);
                }
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Undo the most recent operation. With nothing to undo this is a silent
    /// no-op.
    pub fn undo(&mut self) -> OpResult<()> {
        match self.document.undo() {
            Ok(_) => {
                self.observer.on_operation_log_removed();
                self.observer.on_matrix_changed(&self.document.snapshot());
                Ok(())
            }
            Err(RowOpError::EmptyHistory) => {
                debug!("undo requested with empty history");
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Clear the matrix, history and log unconditionally.
    pub fn reset(&mut self) {
        self.document.reset();
        self.observer.on_reset();
        self.observer.on_matrix_changed(&Matrix::default());
    }

    fn report(&mut self, err: RowOpError) -> RowOpError {
        debug!(kind = %err.kind(), error = %err, "operation rejected");
        self.observer.on_error(err.kind(), &err.to_string());
        err
    }
}

impl<O: SessionObserver + Default> Default for Session<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Event {
        Changed(Vec<Vec<String>>),
        Ready,
        Reset,
        Logged(String),
        LogRemoved,
        Error(ErrorKind),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl SessionObserver for Recorder {
        fn on_matrix_changed(&mut self, matrix: &Matrix) {
            self.events.push(Event::Changed(matrix.to_display_rows()));
        }
        fn on_matrix_ready(&mut self, _matrix: &Matrix) {
            self.events.push(Event::Ready);
        }
        fn on_reset(&mut self) {
            self.events.push(Event::Reset);
        }
        fn on_operation_logged(&mut self, text: &str) {
            self.events.push(Event::Logged(text.to_string()));
        }
        fn on_operation_log_removed(&mut self) {
            self.events.push(Event::LogRemoved);
        }
        fn on_error(&mut self, kind: ErrorKind, message: &str) {
            assert!(!message.is_empty());
            self.events.push(Event::Error(kind));
        }
    }

    fn rows(r: &[&[&str]]) -> Vec<Vec<String>> {
        r.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn take(session: &mut Session<Recorder>) -> Vec<Event> {
        std::mem::take(&mut session.observer_mut().events)
    }

    #[test]
    fn test_set_apply_undo_events() {
        let mut session = Session::new(Recorder::default());

        session.set_matrix_text("1 2\n3 4").unwrap();
        assert_eq!(
            take(&mut session),
            vec![Event::Ready, Event::Changed(rows(&[&["1", "2"], &["3", "4"]]))]
        );

        session.apply("R1 <> R2").unwrap();
        assert_eq!(
            take(&mut session),
            vec![
                Event::Changed(rows(&[&["3", "4"], &["1", "2"]])),
                Event::Logged("R1 <> R2".to_string()),
            ]
        );

        session.undo().unwrap();
        assert_eq!(
            take(&mut session),
            vec![
                Event::LogRemoved,
                Event::Changed(rows(&[&["1", "2"], &["3", "4"]])),
            ]
        );
    }

    #[test]
    fn test_errors_are_reported_and_returned() {
        let mut session = Session::new(Recorder::default());

        assert!(session.apply("R1 <> R2").is_err());
        assert!(session.undo().is_err());
        assert!(session.set_matrix_text("").is_err());
        assert!(session.set_matrix(&[vec!["1", "2"], vec!["3"]]).is_err());
        assert!(session.set_matrix(&[vec!["a"]]).is_err());
        assert_eq!(
            take(&mut session),
            vec![
                Event::Error(ErrorKind::NoMatrixLoaded),
                Event::Error(ErrorKind::NoMatrixLoaded),
                Event::Error(ErrorKind::EmptyMatrix),
                Event::Error(ErrorKind::RaggedMatrix),
                Event::Error(ErrorKind::MalformedRow),
            ]
        );

        session.set_matrix(&[vec!["1", "2"], vec!["3", "4"]]).unwrap();
        take(&mut session);
        let err = session.apply("R1 = R1 / 0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(take(&mut session), vec![Event::Error(ErrorKind::DivisionByZero)]);
        assert_eq!(session.document().history_depth(), 0);
    }

    #[test]
    fn test_missing_matrix_file_reports_file_unreadable() {
        let mut session = Session::new(Recorder::default());
        let path = std::env::temp_dir().join(format!(
            "rowreduce_session_missing_{}.txt",
            std::process::id()
        ));
        let err = session.load_matrix_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileUnreadable);
        assert_eq!(
            take(&mut session),
            vec![Event::Error(ErrorKind::FileUnreadable)]
        );
        assert!(!session.document().is_ready());
    }

    #[test]
    fn test_undo_with_empty_history_is_silent() {
        let mut session = Session::new(Recorder::default());
        session.set_matrix_text("1").unwrap();
        take(&mut session);

        assert!(session.undo().is_ok());
        assert!(take(&mut session).is_empty());
    }

    #[test]
    fn test_reset_notifies_with_empty_matrix() {
        let mut session = Session::new(Recorder::default());
        session.set_matrix_text("1 2").unwrap();
        session.apply("R1 = R1 * 2").unwrap();
        take(&mut session);

        session.reset();
        assert_eq!(
            take(&mut session),
            vec![Event::Reset, Event::Changed(Vec::new())]
        );
        assert!(!session.document().is_ready());
        assert!(session.document().operation_log().is_empty());
    }

    #[test]
    fn test_unit_observer_session() {
        let mut session: Session<()> = Session::default();
        session.set_matrix_text("2 4").unwrap();
        session.apply("R1 = R1 / 2").unwrap();
        assert_eq!(
            session.document().matrix().unwrap().to_display_rows(),
            vec![vec!["1", "2"]]
        );
    }
}
