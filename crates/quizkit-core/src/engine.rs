//! The quiz engine: random selection, answer evaluation, and scoring.
//!
//! Every operation here is a synchronous pure function over already-loaded
//! data; content loading and persistence live in their own crates.

use std::collections::BTreeSet;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{Question, QuizAnswer};

/// Return a shuffled copy of `input` using the given random source.
///
/// Fisher-Yates over the full slice: iterate from the last index down to 1,
/// swapping each element with a uniformly random element at an index no
/// greater than its own. Every permutation is equally likely.
pub fn shuffled_with<T: Clone, R: Rng>(input: &[T], rng: &mut R) -> Vec<T> {
    let mut items = input.to_vec();
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Return a shuffled copy of `input`. The input is never mutated.
pub fn shuffled<T: Clone>(input: &[T]) -> Vec<T> {
    shuffled_with(input, &mut rand::thread_rng())
}

/// Draw `count` questions from `pool` without duplicates.
///
/// The full pool is permuted uniformly and then truncated, so every
/// question has equal selection probability. Requests larger than the pool
/// clamp to the pool size; an empty pool or a zero count yields an empty
/// selection.
pub fn select_random_questions(pool: &[Question], count: usize) -> Vec<Question> {
    let mut selected = shuffled(pool);
    selected.truncate(count);
    selected
}

/// Whether `selected` is exactly the question's correct answer set.
///
/// Order-insensitive; duplicate submissions collapse. Partial matches are
/// never correct.
pub fn is_answer_correct(question: &Question, selected: &[String]) -> bool {
    let submitted: BTreeSet<&str> = selected.iter().map(String::as_str).collect();
    let correct: BTreeSet<&str> = question
        .correct_answers
        .iter()
        .map(String::as_str)
        .collect();
    submitted == correct
}

/// Final score of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Count of correct answers.
    pub score: usize,
    /// Count of answered questions.
    pub total: usize,
    /// Rounded integer percentage, 0 when nothing was answered.
    pub percentage: u32,
}

/// Aggregate an answer log into a score summary.
pub fn calculate_score(answers: &[QuizAnswer]) -> ScoreSummary {
    let score = answers.iter().filter(|a| a.correct).count();
    let total = answers.len();
    let percentage = if total == 0 {
        0
    } else {
        ((score as f64 / total as f64) * 100.0).round() as u32
    };
    ScoreSummary {
        score,
        total,
        percentage,
    }
}

/// Performance tiers with inclusive lower percentage bounds, evaluated
/// top-down so higher tiers take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Outstanding,
    Excellent,
    Great,
    Good,
    KeepLearning,
    KeepPracticing,
}

impl PerformanceTier {
    /// Classify a percentage into its tier.
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 90 => PerformanceTier::Outstanding,
            p if p >= 80 => PerformanceTier::Excellent,
            p if p >= 70 => PerformanceTier::Great,
            p if p >= 60 => PerformanceTier::Good,
            p if p >= 50 => PerformanceTier::KeepLearning,
            _ => PerformanceTier::KeepPracticing,
        }
    }

    /// The message shown to the user for this tier.
    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::Outstanding => "Outstanding!",
            PerformanceTier::Excellent => "Excellent work!",
            PerformanceTier::Great => "Great job!",
            PerformanceTier::Good => "Good effort!",
            PerformanceTier::KeepLearning => "Keep learning!",
            PerformanceTier::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Performance message for a percentage.
pub fn performance_message(percentage: u32) -> &'static str {
    PerformanceTier::for_percentage(percentage).message()
}

const ID_SUFFIX_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a result identifier: epoch-millisecond timestamp plus a short
/// random base-36 suffix.
///
/// Unique with overwhelming probability at interactive usage scale;
/// collisions are not detected.
pub fn generate_result_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Format an elapsed duration for display, e.g. `45s` or `2m 5s`.
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    format!("{}m {}s", seconds / 60, seconds % 60)
}
