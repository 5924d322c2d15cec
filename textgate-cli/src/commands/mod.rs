//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

pub mod check;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether files contain a pattern, reading them in bounded sections
    Check(check::CheckArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    ///
    /// `check` exits with 1 when no file matched, mirroring grep.
    pub fn execute(&self) -> Result<ExitCode> {
        match self {
            Commands::Check(args) => {
                let matched = args.execute()?;
                Ok(if matched {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                })
            }
            Commands::GenerateConfig(args) => {
                args.execute()?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Validate(args) => {
                args.execute()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
