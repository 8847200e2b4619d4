//! The `quizkit play` command: one interactive attempt from selection to
//! persisted result.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;

use quizkit_content::{load_catalog, load_pool, DirectorySource, QuestionSource};
use quizkit_core::engine::{
    calculate_score, format_duration, generate_result_id, performance_message,
    select_random_questions,
};
use quizkit_core::model::{
    Part, Question, QuestionType, Quiz, QuizAnswer, QuizProgress, QuizResult,
};
use quizkit_core::sections::group_answers_by_section;
use quizkit_storage::{FileBackend, ProgressStore};

use crate::config::load_config_from;

pub async fn execute(
    quiz_id: Option<String>,
    count: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if let Some(count) = count {
        anyhow::ensure!(count >= 1, "count must be at least 1");
    }

    let config = load_config_from(config_path.as_deref())?;
    let source = DirectorySource::new(&config.content_dir);
    let store = ProgressStore::new(FileBackend::new(&config.data_dir));

    // Resolve the quiz and the topics backing its pool.
    let (quiz, topics) = match quiz_id.as_deref() {
        None | Some("global") => {
            let topics = source
                .topics()
                .await
                .with_context(|| {
                    format!("failed to list topics in {}", config.content_dir.display())
                })?;
            (Quiz::global(0), topics)
        }
        Some(id) => {
            let catalog = load_catalog(&config.content_dir)?;
            let quiz = catalog
                .into_iter()
                .find(|q| q.id == id)
                .with_context(|| format!("unknown quiz '{id}'"))?;
            let topics = if quiz.part == Part::Global {
                source.topics().await.with_context(|| {
                    format!("failed to list topics in {}", config.content_dir.display())
                })?
            } else {
                vec![quiz.chapter.clone()]
            };
            (quiz, topics)
        }
    };

    let pool = load_pool(&source, &topics).await;
    tracing::info!("loaded {} question(s) from {} topic(s)", pool.len(), topics.len());
    anyhow::ensure!(!pool.is_empty(), "no questions available for this attempt");

    let count = count.unwrap_or(config.default_question_count);
    let questions = select_random_questions(&pool, count);

    // A leftover slot belongs to an interrupted earlier attempt; this
    // session starts fresh.
    if store.current_progress().is_some() {
        eprintln!("Discarding an interrupted earlier session.");
        store.clear_current_progress();
    }

    println!(
        "{}: {} question(s). Answer with an option id, or several separated by commas.\n",
        quiz.title,
        questions.len()
    );

    let started = Instant::now();
    let started_at = Utc::now().timestamp_millis();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers: Vec<QuizAnswer> = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        print_question(index + 1, questions.len(), question);

        let Some(line) = lines.next() else {
            // Input ended mid-attempt; the saved slot records where it
            // stopped.
            eprintln!("\nAttempt interrupted after {} answer(s).", answers.len());
            return Ok(());
        };
        let selected = parse_selection(&line.context("failed to read answer")?);

        let answer = QuizAnswer::record(question, &selected);
        if answer.correct {
            println!("Correct!");
        } else {
            println!(
                "Incorrect. Correct answer: {}",
                question.correct_answers.join(", ")
            );
        }
        if !question.explanation.is_empty() {
            println!("{}", question.explanation);
        }
        println!();

        answers.push(answer);
        store.save_current_progress(&QuizProgress {
            current_question_index: index + 1,
            answers: answers.clone(),
            started_at,
        });
    }

    let summary = calculate_score(&answers);
    let time_spent = started.elapsed().as_secs();

    let result = QuizResult {
        id: generate_result_id(),
        quiz_id: quiz.id.clone(),
        quiz_title: quiz.title.clone(),
        score: summary.score,
        total: summary.total,
        percentage: summary.percentage,
        completed_at: Utc::now(),
        answers: answers.clone(),
        time_spent: Some(time_spent),
    };
    store.add_quiz_result(result);
    store.clear_current_progress();

    println!(
        "Score: {}/{} ({}%)",
        summary.score, summary.total, summary.percentage
    );
    println!("{}", performance_message(summary.percentage));
    println!("Time: {}", format_duration(time_spent));

    let breakdown = group_answers_by_section(&answers, &questions);
    if breakdown.len() > 1 {
        println!("\nBy section:");
        for (section, score) in &breakdown {
            println!("  {section}: {}/{}", score.correct, score.total);
        }
    }

    Ok(())
}

fn print_question(number: usize, total: usize, question: &Question) {
    println!(
        "[{number}/{total}] ({}, {}) {}",
        question.chapter, question.difficulty, question.question
    );
    for option in &question.options {
        println!("  {}) {}", option.id, option.text);
    }
    match question.question_type {
        QuestionType::Single => print!("> "),
        QuestionType::Multiple => print!("(select all that apply) > "),
    }
    let _ = io::stdout().flush();
}

/// Split a typed answer line into option ids.
fn parse_selection(line: &str) -> Vec<String> {
    line.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parsing_trims_and_drops_empties() {
        assert_eq!(parse_selection("a"), vec!["a"]);
        assert_eq!(parse_selection(" a , c "), vec!["a", "c"]);
        assert_eq!(parse_selection("a,,c"), vec!["a", "c"]);
        assert!(parse_selection("").is_empty());
        assert!(parse_selection(" , ").is_empty());
    }
}
