//! Configuration module

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use textgate_core::EvaluatorConfig;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Sectioned evaluation settings
    #[serde(default)]
    pub evaluation: EvaluatorConfig,

    /// Condition configuration
    #[serde(default)]
    pub condition: ConditionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        Ok(config)
    }
}

/// Condition-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConditionConfig {
    /// Regular expression searched for in content
    pub pattern: Option<String>,

    /// Match the pattern regardless of case
    pub ignore_case: bool,

    /// Treat the pattern as literal text
    pub literal: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}
