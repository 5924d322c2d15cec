//! Error types for sectioned evaluation

use std::io;
use thiserror::Error;

/// Errors raised while evaluating document content
#[derive(Error, Debug)]
pub enum EvalError {
    /// The content stream (or the chunk source over it) failed
    #[error("cannot read content for evaluation: {0}")]
    ContentRead(#[from] io::Error),

    /// Configuration rejected before any content was read
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// A condition pattern failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A section predicate failed on its own terms
    #[error("condition failed: {reason}")]
    ConditionFailed {
        /// Why the predicate could not produce a result
        reason: String,
    },
}

impl EvalError {
    /// Build a predicate failure from any displayable reason
    pub fn condition_failed(reason: impl Into<String>) -> Self {
        EvalError::ConditionFailed {
            reason: reason.into(),
        }
    }
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_read_display_keeps_cause() {
        let err = EvalError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "disk gone"));
        assert_eq!(
            err.to_string(),
            "cannot read content for evaluation: disk gone"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_condition_failed_helper() {
        let err = EvalError::condition_failed("metadata field missing");
        assert!(matches!(err, EvalError::ConditionFailed { .. }));
        assert_eq!(err.to_string(), "condition failed: metadata field missing");
    }
}
