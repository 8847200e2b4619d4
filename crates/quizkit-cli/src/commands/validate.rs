//! The `quizkit validate` command: the authoring-time coverage check for
//! catalog and question documents.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;

use quizkit_content::{load_catalog, DirectorySource, QuestionSource};
use quizkit_core::catalog::{validate_catalog, validate_questions, ValidationWarning};

use crate::config::load_config_from;

pub async fn execute(content_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let content_dir = content_dir.unwrap_or(config.content_dir);

    let source = DirectorySource::new(&content_dir);
    let topics = source.topics().await?;
    let quizzes = load_catalog(&content_dir)?;

    let mut available: HashMap<String, usize> = HashMap::new();
    let mut total_warnings = 0;

    for topic in &topics {
        match source.fetch_questions(topic).await {
            Ok(questions) => {
                println!("Topic: {topic} ({} questions)", questions.len());
                let warnings = validate_questions(&questions);
                print_warnings(&warnings);
                total_warnings += warnings.len();
                available.insert(topic.clone(), questions.len());
            }
            Err(e) => {
                println!("Topic: {topic}");
                println!("  WARNING: {e}");
                total_warnings += 1;
            }
        }
    }

    println!("Catalog: {} quiz(zes)", quizzes.len());
    let catalog_warnings = validate_catalog(&quizzes, &available);
    print_warnings(&catalog_warnings);
    total_warnings += catalog_warnings.len();

    if total_warnings == 0 {
        println!("All content valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        let prefix = warning
            .id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", warning.message);
    }
}
