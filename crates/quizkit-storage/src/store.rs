//! The progress store: single owner of the durable quiz state.
//!
//! Two logical keys live under the `quizkit-` namespace: the full
//! [`UserProgress`] record and the smaller in-flight session slot. Each is
//! read in full and rewritten in full; the read-modify-write inside
//! [`ProgressStore::add_quiz_result`] is last-writer-wins under concurrent
//! writers, and is isolated here so a locking backend could be substituted
//! without touching callers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use quizkit_core::model::{QuizMetadata, QuizProgress, QuizResult, UserProgress};

use crate::backend::StorageBackend;

/// Storage key for the completed-results history and per-quiz rollups.
pub const USER_PROGRESS_KEY: &str = "quizkit-user-progress";

/// Storage key for the in-flight attempt slot.
pub const CURRENT_PROGRESS_KEY: &str = "quizkit-current-progress";

/// Persistence component for attempt history, rollups, and the session
/// slot. No operation here returns an error: unavailable or corrupt
/// storage reads as the empty default, and failed writes are logged and
/// dropped.
pub struct ProgressStore {
    backend: Box<dyn StorageBackend>,
}

impl ProgressStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    fn read_blob<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let blob = match self.backend.get(key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("reading '{key}' failed, treating as absent: {e}");
                return None;
            }
        };

        match serde_json::from_str(&blob) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("stored '{key}' is malformed, treating as absent: {e}");
                None
            }
        }
    }

    fn write_blob<T: Serialize>(&self, key: &str, value: &T) {
        let blob = match serde_json::to_string(value) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("serializing '{key}' failed, dropping update: {e}");
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &blob) {
            tracing::warn!("writing '{key}' failed, dropping update: {e}");
        }
    }

    fn remove_key(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            tracing::warn!("removing '{key}' failed: {e}");
        }
    }

    /// The persisted progress record, or the empty default when storage is
    /// empty, unavailable, or malformed.
    pub fn user_progress(&self) -> UserProgress {
        self.read_blob(USER_PROGRESS_KEY).unwrap_or_default()
    }

    /// Serialize and overwrite the entire progress record.
    pub fn save_user_progress(&self, progress: &UserProgress) {
        self.write_blob(USER_PROGRESS_KEY, progress);
    }

    /// Record a completed attempt: prepend it to the history and update the
    /// per-quiz rollup.
    pub fn add_quiz_result(&self, result: QuizResult) {
        let mut progress = self.user_progress();

        let metadata = progress
            .quiz_metadata
            .entry(result.quiz_id.clone())
            .or_insert_with(|| QuizMetadata {
                quiz_id: result.quiz_id.clone(),
                attempts: 0,
                best_score: 0,
                last_attempt_at: None,
            });
        metadata.attempts += 1;
        metadata.best_score = metadata.best_score.max(result.percentage);
        metadata.last_attempt_at = Some(result.completed_at);

        progress.results.insert(0, result);
        self.save_user_progress(&progress);
    }

    /// All recorded results, or those of a single quiz, most recent first.
    pub fn quiz_results(&self, quiz_id: Option<&str>) -> Vec<QuizResult> {
        let progress = self.user_progress();
        match quiz_id {
            Some(id) => progress
                .results
                .into_iter()
                .filter(|r| r.quiz_id == id)
                .collect(),
            None => progress.results,
        }
    }

    /// The rollup for one quiz, if any attempt has been recorded.
    pub fn quiz_metadata(&self, quiz_id: &str) -> Option<QuizMetadata> {
        self.user_progress().quiz_metadata.remove(quiz_id)
    }

    /// Irreversibly remove all history, rollups, and the session slot.
    pub fn clear_all(&self) {
        self.remove_key(USER_PROGRESS_KEY);
        self.remove_key(CURRENT_PROGRESS_KEY);
    }

    /// The in-flight attempt slot, if a session was interrupted.
    pub fn current_progress(&self) -> Option<QuizProgress> {
        self.read_blob(CURRENT_PROGRESS_KEY)
    }

    /// Persist the in-flight attempt slot.
    pub fn save_current_progress(&self, progress: &QuizProgress) {
        self.write_blob(CURRENT_PROGRESS_KEY, progress);
    }

    /// Drop the in-flight attempt slot.
    pub fn clear_current_progress(&self) {
        self.remove_key(CURRENT_PROGRESS_KEY);
    }
}
