//! Core data model types for quizkit.
//!
//! These are the fundamental types the entire quizkit system uses to
//! represent questions, quizzes, recorded answers, and persisted progress.
//! Everything that crosses a document or storage boundary serializes with
//! camelCase field names, matching the established question-document and
//! progress-blob formats.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Question difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Whether a question expects one selected option or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multiple,
}

/// One selectable option of a question. Option ids are unique within
/// their question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Short identifier referenced by `Question::correct_answers`.
    pub id: String,
    /// Text shown to the user.
    pub text: String,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// Topic tag the question belongs to.
    pub chapter: String,
    /// Optional finer-grained tag within the chapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Single- or multiple-answer.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// The prompt text.
    pub question: String,
    /// Ordered list of selectable options.
    pub options: Vec<QuestionOption>,
    /// Option ids that make up the correct answer set.
    pub correct_answers: Vec<String>,
    /// Shown after the question is answered.
    #[serde(default)]
    pub explanation: String,
    /// Reference back to the source material.
    #[serde(default)]
    pub source_url: String,
}

impl Question {
    /// The tag used to bucket this question for breakdown reporting:
    /// the section when present, otherwise the chapter.
    pub fn group_key(&self) -> &str {
        self.section.as_deref().unwrap_or(&self.chapter)
    }
}

/// Which part of the catalog a quiz belongs to. `Global` is the sentinel
/// for the cross-topic aggregate quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Part {
    Global,
    One,
    Two,
    Three,
}

impl TryFrom<u8> for Part {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Part::Global),
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            3 => Ok(Part::Three),
            other => Err(format!("unknown part: {other}")),
        }
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        match part {
            Part::Global => 0,
            Part::One => 1,
            Part::Two => 2,
            Part::Three => 3,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Global => write!(f, "global"),
            part => write!(f, "part {}", u8::from(*part)),
        }
    }
}

/// A named, bounded collection of questions on one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Short description shown in listings.
    #[serde(default)]
    pub description: String,
    /// Part classification; `Part::Global` for the cross-topic aggregate.
    pub part: Part,
    /// Topic tag whose question document backs this quiz.
    pub chapter: String,
    /// Declared question count; checked by content validation, not by
    /// the engine.
    pub total_questions: usize,
}

impl Quiz {
    /// The cross-topic aggregate quiz drawing questions from every chapter.
    pub fn global(total_questions: usize) -> Self {
        Self {
            id: "global".into(),
            title: "Global Quiz".into(),
            description: "Questions drawn from every chapter".into(),
            part: Part::Global,
            chapter: "global".into(),
            total_questions,
        }
    }
}

/// One submitted answer, evaluated at submission time. Immutable after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    /// The question this answer belongs to.
    pub question_id: String,
    /// Selected option ids, deduplicated, order-irrelevant.
    pub selected_answers: Vec<String>,
    /// Whether the selection matched the correct answer set exactly.
    pub correct: bool,
    /// Submission time in epoch milliseconds.
    pub timestamp: i64,
}

impl QuizAnswer {
    /// Evaluate `selected` against `question` and record the outcome.
    pub fn record(question: &Question, selected: &[String]) -> Self {
        let mut selected = selected.to_vec();
        selected.sort();
        selected.dedup();
        Self {
            question_id: question.id.clone(),
            correct: crate::engine::is_answer_correct(question, &selected),
            selected_answers: selected,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// One completed pass through a selected question subset. Created once at
/// quiz completion; owned by the persisted history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// Unique result identifier.
    pub id: String,
    /// The quiz this attempt was for.
    pub quiz_id: String,
    /// Title snapshot at completion time; survives later catalog renames.
    pub quiz_title: String,
    /// Count of correct answers.
    pub score: usize,
    /// Count of answered questions.
    pub total: usize,
    /// Rounded integer percentage, 0-100.
    pub percentage: u32,
    /// Completion time.
    pub completed_at: DateTime<Utc>,
    /// The full answer log, in question order.
    pub answers: Vec<QuizAnswer>,
    /// Elapsed time in seconds, when the caller tracked it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

/// Per-quiz rollup, updated every time a result is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    /// The quiz this rollup tracks.
    pub quiz_id: String,
    /// Number of completed attempts.
    pub attempts: u32,
    /// Best percentage ever achieved.
    pub best_score: u32,
    /// Time of the most recent attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<DateTime<Utc>>,
}

/// The root persisted aggregate: per-quiz rollups plus the full result
/// history, most recent first. Read and rewritten in full on each mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(default)]
    pub quiz_metadata: HashMap<String, QuizMetadata>,
    #[serde(default)]
    pub results: Vec<QuizResult>,
}

/// The in-flight attempt slot, persisted separately from completed history
/// so an interrupted session can be resumed. Cleared on completion or
/// abandonment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    /// Index of the question the user is currently on.
    pub current_question_index: usize,
    /// Answers recorded so far.
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
    /// Session start in epoch milliseconds.
    pub started_at: i64,
}
