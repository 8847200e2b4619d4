//! Storage backend error types.
//!
//! These stay inside the persistence layer: [`crate::store::ProgressStore`]
//! catches them, logs, and degrades to defaults, so callers never handle a
//! storage error directly.

use thiserror::Error;

/// Errors a storage backend can report.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used at all in this context.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// An underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
