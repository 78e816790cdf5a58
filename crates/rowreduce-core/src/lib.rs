//! rowreduce-core - UI-agnostic document model, session controller + storage.

pub mod document;
pub mod error;
pub mod session;
pub mod storage;

pub use document::Document;
pub use error::{Result, RowReduceError};
pub use session::{Session, SessionObserver};

pub use rowreduce_engine::engine::{ErrorKind, Matrix, RowOpError, Value};
