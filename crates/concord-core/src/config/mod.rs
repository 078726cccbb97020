//! Configuration management

use crate::error::{ConcordError, Result};
use crate::kwic::{KwicOptions, MatchMode, DEFAULT_WINDOW};
use crate::table::DEFAULT_TEXT_COLUMN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternate config file
pub const CONFIG_ENV: &str = "CONCORD_CONFIG";

/// Environment variable overriding the window size
pub const WINDOW_ENV: &str = "CONCORD_WINDOW";

/// Environment variable overriding the text column
pub const TEXT_COLUMN_ENV: &str = "CONCORD_TEXT_COLUMN";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tokens per window
    #[serde(default = "default_window")]
    pub window: usize,

    /// Column holding the document body
    #[serde(default = "default_text_column")]
    pub text_column: String,

    /// Keyword match mode
    #[serde(default)]
    pub mode: MatchMode,

    #[serde(default)]
    pub ignore_case: bool,

    /// Glob pattern for directory loads; each source has its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: default_window(),
            text_column: default_text_column(),
            mode: MatchMode::default(),
            ignore_case: false,
            pattern: None,
        }
    }
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_text_column() -> String {
    DEFAULT_TEXT_COLUMN.to_string()
}

impl Config {
    /// Load config from a path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Write config as YAML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path (`CONCORD_CONFIG` wins when set)
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Override fields from `CONCORD_WINDOW` and `CONCORD_TEXT_COLUMN`
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(window) = std::env::var(WINDOW_ENV) {
            self.window = window.trim().parse().map_err(|_| {
                ConcordError::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    WINDOW_ENV, window
                ))
            })?;
        }
        if let Ok(column) = std::env::var(TEXT_COLUMN_ENV) {
            if !column.is_empty() {
                self.text_column = column;
            }
        }
        Ok(())
    }

    /// Build extraction options for a keyword
    pub fn to_options(&self, keyword: impl Into<String>) -> KwicOptions {
        KwicOptions::new(keyword)
            .with_window(self.window)
            .with_text_column(self.text_column.clone())
            .with_mode(self.mode)
            .with_ignore_case(self.ignore_case)
    }
}
