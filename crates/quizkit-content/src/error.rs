//! Content source error types.
//!
//! These errors stay inside the loading layer: a failed topic degrades to
//! an empty question set, so callers of `load_pool` never see them. They
//! are typed so the loader can log missing documents and malformed ones
//! differently.

use thiserror::Error;

/// Errors that can occur when fetching a topic's question document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The topic has no question document.
    #[error("no question document for topic '{topic}'")]
    NotFound { topic: String },

    /// The document exists but could not be read.
    #[error("failed to read question document: {0}")]
    Io(#[from] std::io::Error),

    /// The document was read but could not be parsed.
    #[error("failed to parse question document: {0}")]
    Parse(String),
}

impl ContentError {
    /// Returns `true` when the topic simply has no document, as opposed to
    /// a document that exists but is broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}
