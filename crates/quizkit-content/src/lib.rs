//! quizkit-content — Question sources and pool loading.
//!
//! The question store is external, read-only input: topic documents that
//! may each be missing or malformed. This crate defines the source
//! abstraction, a directory-backed implementation, and the aggregation
//! step that degrades per-topic failures to empty sets instead of failing
//! the whole load.

pub mod error;
pub mod loader;
pub mod source;

pub use error::ContentError;
pub use loader::{load_catalog, load_pool};
pub use source::{DirectorySource, QuestionSource, StaticSource};
