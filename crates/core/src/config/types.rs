use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Directory holding the notes to index.
    pub notes_root: String,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct IndexConfig {
    /// Optional override for the index directory
    /// (defaults to `{{notes_root}}/.notewiki`).
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Fully resolved configuration with expanded paths.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub notes_root: PathBuf,
    pub index_dir: PathBuf,
    pub logging: LoggingConfig,
}
