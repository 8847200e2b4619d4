//! The `quizkit clear` command.

use std::path::PathBuf;

use anyhow::Result;

use quizkit_storage::{FileBackend, ProgressStore};

use crate::config::load_config_from;

pub fn execute(yes: bool, config_path: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        yes,
        "this deletes all recorded progress; pass --yes to confirm"
    );

    let config = load_config_from(config_path.as_deref())?;
    let store = ProgressStore::new(FileBackend::new(&config.data_dir));
    store.clear_all();

    println!("All progress cleared.");
    Ok(())
}
