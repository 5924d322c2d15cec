//! textgate command-line entry point

use clap::Parser;
use std::process::ExitCode;
use textgate_cli::commands::Commands;

/// Check whether documents contain a pattern without loading them whole
#[derive(Debug, Parser)]
#[command(name = "textgate", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
