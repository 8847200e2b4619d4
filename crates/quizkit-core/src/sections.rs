//! Sectional breakdown of attempt answers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Question, QuizAnswer};

/// Correct/total counts for one section bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub correct: usize,
    pub total: usize,
}

/// Group answers by each question's section tag, falling back to its
/// chapter tag when no finer-grained section is set.
///
/// Keys appear in insertion order of first encounter. Answers whose
/// question id is absent from `questions` are skipped: result records may
/// outlive content changes, and a stale answer must not abort reporting.
pub fn group_answers_by_section(
    answers: &[QuizAnswer],
    questions: &[Question],
) -> IndexMap<String, SectionScore> {
    let mut grouped: IndexMap<String, SectionScore> = IndexMap::new();

    for answer in answers {
        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            continue;
        };

        let entry = grouped
            .entry(question.group_key().to_string())
            .or_default();
        entry.total += 1;
        if answer.correct {
            entry.correct += 1;
        }
    }

    grouped
}
