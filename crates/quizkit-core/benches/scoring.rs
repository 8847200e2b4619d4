use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizkit_core::engine::calculate_score;
use quizkit_core::model::{Difficulty, Question, QuestionOption, QuestionType, QuizAnswer};
use quizkit_core::sections::group_answers_by_section;

fn make_answers(count: usize) -> Vec<QuizAnswer> {
    (0..count)
        .map(|i| QuizAnswer {
            question_id: format!("q{i}"),
            selected_answers: vec!["a".into()],
            correct: i % 3 != 0,
            timestamp: i as i64,
        })
        .collect()
}

fn make_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| Question {
            id: format!("q{i}"),
            chapter: format!("chapter-{}", i % 6),
            section: (i % 2 == 0).then(|| format!("section-{}", i % 12)),
            difficulty: Difficulty::Intermediate,
            question_type: QuestionType::Single,
            question: format!("Question {i}?"),
            options: vec![QuestionOption {
                id: "a".into(),
                text: "A".into(),
            }],
            correct_answers: vec!["a".into()],
            explanation: String::new(),
            source_url: String::new(),
        })
        .collect()
}

fn bench_calculate_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_score");

    for &count in &[10usize, 100, 1000] {
        let answers = make_answers(count);
        group.bench_function(format!("answers={count}"), |b| {
            b.iter(|| calculate_score(black_box(&answers)))
        });
    }

    group.finish();
}

fn bench_section_breakdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_answers_by_section");

    for &count in &[25usize, 100] {
        let answers = make_answers(count);
        let questions = make_questions(count);
        group.bench_function(format!("answers={count}"), |b| {
            b.iter(|| group_answers_by_section(black_box(&answers), black_box(&questions)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_score, bench_section_breakdown);
criterion_main!(benches);
