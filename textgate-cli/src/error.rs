//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Evaluation error from core
    EvaluationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EvaluationError(msg) => write!(f, "Evaluation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<textgate_core::EvalError> for CliError {
    fn from(err: textgate_core::EvalError) -> Self {
        match err {
            textgate_core::EvalError::ConfigError(msg) => CliError::ConfigError(msg),
            err @ textgate_core::EvalError::InvalidPattern(_) => {
                CliError::ConfigError(err.to_string())
            }
            other => CliError::EvaluationError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
