//! quizkit-storage — Durable progress persistence.
//!
//! All attempt history, per-quiz rollups, and the in-flight session slot
//! go through [`ProgressStore`], which owns the persisted record
//! exclusively. Storage trouble never reaches the caller: an unavailable
//! or corrupt backend degrades to the empty default on read and to a
//! logged no-op on write.

pub mod backend;
pub mod error;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use store::ProgressStore;
