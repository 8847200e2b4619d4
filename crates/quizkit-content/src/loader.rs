//! Pool aggregation over independent topic fetches.

use std::path::Path;

use anyhow::{Context, Result};
use futures::future::join_all;

use quizkit_core::catalog;
use quizkit_core::model::{Question, Quiz};

use crate::source::{QuestionSource, CATALOG_FILE_STEM};

/// Load and aggregate the question pool for the given topics.
///
/// Topic fetches run concurrently and independently. A topic that is
/// missing, unreadable, or malformed contributes nothing; the remaining
/// topics still load. Deciding whether an empty aggregate is fatal is the
/// caller's business.
pub async fn load_pool(source: &dyn QuestionSource, topics: &[String]) -> Vec<Question> {
    let fetches = topics.iter().map(|topic| async move {
        match source.fetch_questions(topic).await {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!("skipping topic '{}' from {} source: {}", topic, source.name(), e);
                Vec::new()
            }
        }
    });

    join_all(fetches).await.into_iter().flatten().collect()
}

/// Load the quiz catalog document from a content directory.
pub fn load_catalog(content_dir: &Path) -> Result<Vec<Quiz>> {
    let path = content_dir.join(format!("{CATALOG_FILE_STEM}.json"));
    catalog::load_quiz_catalog(&path)
        .with_context(|| format!("failed to load quiz catalog from {}", content_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use quizkit_core::model::{Difficulty, QuestionOption, QuestionType};
    use std::collections::HashMap;

    fn question(id: &str, chapter: &str) -> Question {
        Question {
            id: id.into(),
            chapter: chapter.into(),
            section: None,
            difficulty: Difficulty::Beginner,
            question_type: QuestionType::Single,
            question: format!("Question {id}?"),
            options: vec![QuestionOption {
                id: "a".into(),
                text: "A".into(),
            }],
            correct_answers: vec!["a".into()],
            explanation: String::new(),
            source_url: String::new(),
        }
    }

    #[tokio::test]
    async fn aggregates_all_successful_topics() {
        let mut topics = HashMap::new();
        topics.insert(
            "funds".to_string(),
            vec![question("q1", "funds"), question("q2", "funds")],
        );
        topics.insert("metrics".to_string(), vec![question("q3", "metrics")]);
        let source = StaticSource::new(topics);

        let pool = load_pool(&source, &["funds".to_string(), "metrics".to_string()]).await;
        assert_eq!(pool.len(), 3);
    }

    #[tokio::test]
    async fn failed_topics_degrade_to_empty() {
        let mut topics = HashMap::new();
        topics.insert("funds".to_string(), vec![question("q1", "funds")]);
        let source = StaticSource::new(topics);

        let pool = load_pool(
            &source,
            &["funds".to_string(), "missing-a".to_string(), "missing-b".to_string()],
        )
        .await;
        assert_eq!(pool.len(), 1);
        assert_eq!(source.fetch_count(), 3);
    }

    #[tokio::test]
    async fn all_failed_topics_yield_empty_pool() {
        let source = StaticSource::new(HashMap::new());
        let pool = load_pool(&source, &["a".to_string(), "b".to_string()]).await;
        assert!(pool.is_empty());
    }

    #[tokio::test]
    async fn no_topics_yield_empty_pool() {
        let source = StaticSource::new(HashMap::new());
        assert!(load_pool(&source, &[]).await.is_empty());
    }

    #[test]
    fn catalog_loads_from_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("quizzes.json"),
            r#"[{"id": "funds", "title": "Funds", "part": 1, "chapter": "funds", "totalQuestions": 2}]"#,
        )
        .unwrap();

        let quizzes = load_catalog(dir.path()).unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].id, "funds");
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog(dir.path()).is_err());
    }
}
