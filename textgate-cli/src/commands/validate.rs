//! Validate command implementation

use crate::{config::CliConfig, error::CliError};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textgate_core::TextCondition;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match self.check() {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Max section size: {} chars",
                    config.evaluation.max_section_size
                );
                match &config.condition.pattern {
                    Some(pattern) => println!("  Pattern: {pattern}"),
                    None => println!("  Pattern: (none, pass --pattern when checking)"),
                }
                println!("  Output format: {:?}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    fn check(&self) -> Result<CliConfig> {
        let config = CliConfig::from_file(&self.config)?;
        config.evaluation.validate().map_err(CliError::from)?;
        if let Some(pattern) = &config.condition.pattern {
            TextCondition::build(
                pattern,
                config.condition.literal,
                config.condition.ignore_case,
            )
            .map_err(CliError::from)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(toml_content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        args.execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let result = validate(
            r#"
[evaluation]
max_section_size = 500

[condition]
pattern = "invoice #\\d+"
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_empty_config() {
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_validate_zero_section_size() {
        let err = validate("[evaluation]\nmax_section_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_section_size"));
    }

    #[test]
    fn test_validate_bad_pattern() {
        let err = validate("[condition]\npattern = \"(unclosed\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_literal_pattern_is_not_compiled_as_regex() {
        assert!(validate("[condition]\npattern = \"(unclosed\"\nliteral = true\n").is_ok());
    }
}
