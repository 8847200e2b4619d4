use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizkit_core::engine::select_random_questions;
use quizkit_core::model::{Difficulty, Question, QuestionOption, QuestionType};

fn make_pool(size: usize) -> Vec<Question> {
    (0..size)
        .map(|i| Question {
            id: format!("q{i}"),
            chapter: format!("chapter-{}", i % 8),
            section: None,
            difficulty: Difficulty::Beginner,
            question_type: QuestionType::Single,
            question: format!("Question {i}?"),
            options: vec![
                QuestionOption {
                    id: "a".into(),
                    text: "A".into(),
                },
                QuestionOption {
                    id: "b".into(),
                    text: "B".into(),
                },
            ],
            correct_answers: vec!["a".into()],
            explanation: String::new(),
            source_url: String::new(),
        })
        .collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_random_questions");

    for &(pool_size, count) in &[(50usize, 10usize), (500, 25), (2000, 100)] {
        let pool = make_pool(pool_size);
        group.bench_function(format!("pool={pool_size},count={count}"), |b| {
            b.iter(|| select_random_questions(black_box(&pool), black_box(count)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
