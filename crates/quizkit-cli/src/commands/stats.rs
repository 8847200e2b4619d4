//! The `quizkit stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizkit_core::engine::performance_message;
use quizkit_storage::{FileBackend, ProgressStore};

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = ProgressStore::new(FileBackend::new(&config.data_dir));

    let progress = store.user_progress();
    if progress.quiz_metadata.is_empty() {
        println!("No attempts recorded.");
        return Ok(());
    }

    let mut entries: Vec<_> = progress.quiz_metadata.values().collect();
    entries.sort_by(|a, b| a.quiz_id.cmp(&b.quiz_id));

    let mut table = Table::new();
    table.set_header(vec!["Quiz", "Attempts", "Best", "Last attempt"]);

    for metadata in entries {
        let last = metadata
            .last_attempt_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into());
        table.add_row(vec![
            Cell::new(&metadata.quiz_id),
            Cell::new(metadata.attempts),
            Cell::new(format!(
                "{}% ({})",
                metadata.best_score,
                performance_message(metadata.best_score)
            )),
            Cell::new(last),
        ]);
    }

    println!("{table}");
    println!("{} attempt(s) across all quizzes.", progress.results.len());

    Ok(())
}
