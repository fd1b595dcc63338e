use std::path::{Path, PathBuf};
use std::{env, fs};

use shellexpand::full;
use thiserror::Error;

use super::types::{ConfigFile, LoggingConfig, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("failed to expand path '{0}': {1}")]
    BadPath(String, String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let notes_root = expand_path(&cf.notes_root)?;
        let sub = |s: &str| s.replace("{{notes_root}}", &notes_root.to_string_lossy());

        let index_dir = match &cf.index.dir {
            Some(dir) => expand_path(&sub(dir))?,
            None => notes_root.join(".notewiki"),
        };

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig { notes_root, index_dir, logging })
    }
}

/// Default config location under the user config directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(custom) = env::var("NOTEWIKI_CONFIG") {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notewiki")
        .join("config.toml")
}

fn expand_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let expanded =
        full(raw).map_err(|e| ConfigError::BadPath(raw.to_string(), e.to_string()))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
