//! Question document and quiz catalog parsing, with validation.
//!
//! Topic documents come in two accepted shapes: a bare JSON array of
//! questions, or an object wrapping the array under a `questions` field.
//! Validation collects warnings instead of failing, so one bad question
//! never takes down a whole document.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Part, Question, QuestionType, Quiz};

/// Wrapped form of a topic document: `{ "questions": [...] }`.
#[derive(Debug, Deserialize)]
struct WrappedQuestions {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Parse a topic document, accepting both the bare-array and wrapped shapes.
pub fn parse_question_document(content: &str) -> Result<Vec<Question>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("failed to parse question document JSON")?;

    if value.is_array() {
        serde_json::from_value(value).context("failed to parse question list")
    } else {
        let wrapped: WrappedQuestions =
            serde_json::from_value(value).context("failed to parse wrapped question document")?;
        Ok(wrapped.questions)
    }
}

/// Read and parse a topic document from disk.
pub fn load_question_document(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question document: {}", path.display()))?;
    parse_question_document(&content)
}

/// Parse a quiz catalog document (a JSON array of quizzes).
pub fn parse_quiz_catalog(content: &str) -> Result<Vec<Quiz>> {
    serde_json::from_str(content).context("failed to parse quiz catalog JSON")
}

/// Read and parse the quiz catalog from disk.
pub fn load_quiz_catalog(path: &Path) -> Result<Vec<Quiz>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz catalog: {}", path.display()))?;
    parse_quiz_catalog(&content)
}

/// A warning from content validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question or quiz ID (if applicable).
    pub id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_id(id: &str, message: impl Into<String>) -> Self {
        Self {
            id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a set of questions for common authoring issues.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for question in questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning::for_id(
                &question.id,
                format!("duplicate question ID: {}", question.id),
            ));
        }
    }

    for question in questions {
        if question.question.trim().is_empty() {
            warnings.push(ValidationWarning::for_id(&question.id, "prompt is empty"));
        }

        if question.options.is_empty() {
            warnings.push(ValidationWarning::for_id(
                &question.id,
                "question has no options",
            ));
        }

        let mut option_ids = HashSet::new();
        for option in &question.options {
            if !option_ids.insert(option.id.as_str()) {
                warnings.push(ValidationWarning::for_id(
                    &question.id,
                    format!("duplicate option ID: {}", option.id),
                ));
            }
        }

        if question.correct_answers.is_empty() {
            warnings.push(ValidationWarning::for_id(
                &question.id,
                "no correct answers declared",
            ));
        }

        for correct in &question.correct_answers {
            if !option_ids.contains(correct.as_str()) {
                warnings.push(ValidationWarning::for_id(
                    &question.id,
                    format!("correct answer '{correct}' is not an option ID"),
                ));
            }
        }

        if question.question_type == QuestionType::Single && question.correct_answers.len() != 1 {
            warnings.push(ValidationWarning::for_id(
                &question.id,
                format!(
                    "single-answer question declares {} correct answers",
                    question.correct_answers.len()
                ),
            ));
        }
    }

    warnings
}

/// Validate a quiz catalog against the per-topic question counts actually
/// available. The declared totals are an authoring-time contract; the
/// engine itself never enforces them.
pub fn validate_catalog(
    quizzes: &[Quiz],
    available: &HashMap<String, usize>,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for quiz in quizzes {
        if !seen_ids.insert(&quiz.id) {
            warnings.push(ValidationWarning::for_id(
                &quiz.id,
                format!("duplicate quiz ID: {}", quiz.id),
            ));
        }
    }

    for quiz in quizzes {
        // The global aggregate has no single backing topic document.
        if quiz.part == Part::Global {
            continue;
        }

        match available.get(&quiz.chapter) {
            Some(&count) if count != quiz.total_questions => {
                warnings.push(ValidationWarning::for_id(
                    &quiz.id,
                    format!(
                        "declares {} questions but topic '{}' has {}",
                        quiz.total_questions, quiz.chapter, count
                    ),
                ));
            }
            Some(_) => {}
            None => {
                warnings.push(ValidationWarning::for_id(
                    &quiz.id,
                    format!("no question document for topic '{}'", quiz.chapter),
                ));
            }
        }
    }

    warnings
}
