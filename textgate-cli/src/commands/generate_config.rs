//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use textgate_core::DEFAULT_MAX_READ_SIZE;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Set [condition] pattern to the text you are looking for");
        println!("2. Validate your configuration:");
        println!("   textgate validate --config {}", self.output.display());
        println!("3. Use it for checking:");
        println!(
            "   textgate check -i 'docs/*.txt' --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template configuration content
fn generate_template() -> String {
    format!(
        r#"# textgate configuration

[evaluation]
# Maximum number of characters held in memory per section.
# Larger sections keep more context together; smaller ones bound memory tighter.
max_section_size = {DEFAULT_MAX_READ_SIZE}

[condition]
# Regular expression searched for in every section
pattern = "TODO"
# Match regardless of case
ignore_case = false
# Treat the pattern as literal text instead of a regular expression
literal = false

[output]
# "text" or "json"
default_format = "text"
pretty_json = true
"#
    )
}
