//! The `quizkit history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizkit_core::engine::format_duration;
use quizkit_storage::{FileBackend, ProgressStore};

use crate::config::load_config_from;

pub fn execute(quiz_id: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = ProgressStore::new(FileBackend::new(&config.data_dir));

    let results = store.quiz_results(quiz_id.as_deref());
    if results.is_empty() {
        println!("No results recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Completed", "Quiz", "Score", "Percent", "Time"]);

    for result in &results {
        let time = result
            .time_spent
            .map(format_duration)
            .unwrap_or_else(|| "-".into());
        table.add_row(vec![
            Cell::new(result.completed_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&result.quiz_title),
            Cell::new(format!("{}/{}", result.score, result.total)),
            Cell::new(format!("{}%", result.percentage)),
            Cell::new(time),
        ]);
    }

    println!("{table}");
    println!("{} result(s).", results.len());

    Ok(())
}
