//! Error types for concord

use thiserror::Error;

/// Result type alias using ConcordError
pub type Result<T> = std::result::Result<T, ConcordError>;

/// Error type alias for convenience
pub type Error = ConcordError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for concord
#[derive(Debug, Error)]
pub enum ConcordError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl ConcordError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => exit_codes::NOT_FOUND,
            Self::Schema(_)
            | Self::InvalidArgument(_)
            | Self::Config(_)
            | Self::GlobPattern(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ConcordError::Schema("missing column".into()).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            ConcordError::InvalidArgument("empty keyword".into()).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            ConcordError::NotFound("corpus.csv".into()).exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            ConcordError::Parse("bad row".into()).exit_code(),
            exit_codes::GENERAL_ERROR
        );
    }

    #[test]
    fn test_display_messages() {
        let err = ConcordError::Schema("column 'text' not found".into());
        assert_eq!(err.to_string(), "Schema error: column 'text' not found");
    }
}
