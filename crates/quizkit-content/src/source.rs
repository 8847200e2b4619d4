//! Question source implementations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use quizkit_core::catalog::parse_question_document;
use quizkit_core::model::Question;

use crate::error::ContentError;

/// A backend that can fetch per-topic question documents.
///
/// Fetches are independent of each other; the aggregation in
/// [`crate::loader::load_pool`] decides what to do when one fails.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable source name for logging.
    fn name(&self) -> &str;

    /// Fetch the questions for one topic.
    async fn fetch_questions(&self, topic: &str) -> Result<Vec<Question>, ContentError>;

    /// Topics this source knows about.
    async fn topics(&self) -> Result<Vec<String>, ContentError>;
}

/// Question source backed by a directory of `<topic>.json` documents.
pub struct DirectorySource {
    root: PathBuf,
}

/// The quiz catalog file living alongside topic documents; never a topic
/// itself.
pub const CATALOG_FILE_STEM: &str = "quizzes";

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl QuestionSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    async fn fetch_questions(&self, topic: &str) -> Result<Vec<Question>, ContentError> {
        let path = self.root.join(format!("{topic}.json"));
        if !path.is_file() {
            return Err(ContentError::NotFound {
                topic: topic.to_string(),
            });
        }

        let content = tokio::fs::read_to_string(&path).await?;
        parse_question_document(&content).map_err(|e| ContentError::Parse(format!("{e:#}")))
    }

    async fn topics(&self) -> Result<Vec<String>, ContentError> {
        let mut topics = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if stem != CATALOG_FILE_STEM {
                        topics.push(stem.to_string());
                    }
                }
            }
        }

        topics.sort();
        Ok(topics)
    }
}

/// An in-memory source for tests: a fixed topic map plus a fetch counter.
pub struct StaticSource {
    questions: HashMap<String, Vec<Question>>,
    fetch_count: AtomicU32,
}

impl StaticSource {
    pub fn new(questions: HashMap<String, Vec<Question>>) -> Self {
        Self {
            questions,
            fetch_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made against this source.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_questions(&self, topic: &str) -> Result<Vec<Question>, ContentError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.questions
            .get(topic)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                topic: topic.to_string(),
            })
    }

    async fn topics(&self) -> Result<Vec<String>, ContentError> {
        let mut topics: Vec<String> = self.questions.keys().cloned().collect();
        topics.sort();
        Ok(topics)
    }
}
