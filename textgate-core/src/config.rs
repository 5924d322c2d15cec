//! Configuration types for the evaluator

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Default maximum section size in characters, matching
    /// [`crate::reader::DEFAULT_MAX_READ_SIZE`]
    pub const MAX_SECTION_SIZE: usize = crate::reader::DEFAULT_MAX_READ_SIZE;
}

/// Evaluator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Maximum number of characters held in one section
    pub max_section_size: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_section_size: defaults::MAX_SECTION_SIZE,
        }
    }
}

impl EvaluatorConfig {
    /// Create a configuration with the given maximum section size
    pub fn new(max_section_size: usize) -> Self {
        Self { max_section_size }
    }

    /// Create a configuration builder
    pub fn builder() -> EvaluatorConfigBuilder {
        EvaluatorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_section_size == 0 {
            return Err(EvalError::ConfigError(
                "max_section_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`EvaluatorConfig`]
#[derive(Debug, Default)]
pub struct EvaluatorConfigBuilder {
    max_section_size: Option<usize>,
}

impl EvaluatorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum section size in characters
    pub fn max_section_size(mut self, chars: usize) -> Self {
        self.max_section_size = Some(chars);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<EvaluatorConfig> {
        let mut config = EvaluatorConfig::default();

        if let Some(size) = self.max_section_size {
            config.max_section_size = size;
        }

        config.validate()?;
        Ok(config)
    }
}
