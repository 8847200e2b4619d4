//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "quizkit.toml";

/// Top-level quizkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizkitConfig {
    /// Directory holding `quizzes.json` and per-topic question documents.
    pub content_dir: PathBuf,
    /// Directory holding persisted progress.
    pub data_dir: PathBuf,
    /// Question count used when `--count` is not given.
    pub default_question_count: usize,
}

impl Default for QuizkitConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            data_dir: PathBuf::from(".quizkit"),
            default_question_count: 10,
        }
    }
}

/// Load configuration from an explicit path, from `quizkit.toml` in the
/// working directory, or fall back to defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizkitConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.exists() {
                return Ok(QuizkitConfig::default());
            }
            default.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: QuizkitConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(config)
}
