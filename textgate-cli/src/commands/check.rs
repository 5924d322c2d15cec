//! Check command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, FileReader},
    output::{FileReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use textgate_core::{EvaluatorConfig, SectionedEvaluator, TextCondition};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Regular expression to search for (overrides the config file)
    #[arg(short = 'e', long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Treat the pattern as literal text
    #[arg(short = 'F', long)]
    pub literal: bool,

    /// Ignore case when matching
    #[arg(short = 'I', long)]
    pub ignore_case: bool,

    /// Maximum characters held in memory per section
    #[arg(short = 's', long, value_name = "CHARS")]
    pub max_section_size: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Check files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags over the config file
#[derive(Debug)]
struct Settings {
    condition: TextCondition,
    evaluation: EvaluatorConfig,
    format: OutputFormat,
    pretty_json: bool,
}

impl CheckArgs {
    /// Execute the check command, returning whether any file matched
    pub fn execute(&self) -> Result<bool> {
        self.init_logging();

        log::info!("Starting content check");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let evaluator = SectionedEvaluator::with_config(settings.evaluation)
            .map_err(CliError::from)?;
        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Checking {} file(s) for /{}/ in sections of {} chars",
            files.len(),
            settings.condition.as_str(),
            settings.evaluation.max_section_size
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let check = |path: &PathBuf| {
            let report = check_file(&evaluator, &settings.condition, path);
            progress.file_completed(&path.display().to_string());
            report
        };
        let reports = if self.parallel {
            files.par_iter().map(check).collect::<Result<Vec<_>>>()?
        } else {
            files.iter().map(check).collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
        };
        for report in &reports {
            formatter.format_report(report)?;
        }
        formatter.finish()?;

        let matched = reports.iter().filter(|r| r.matched).count();
        log::info!("{} of {} file(s) matched", matched, reports.len());
        Ok(matched > 0)
    }

    /// Merge command-line flags over the config file and defaults
    fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let pattern = self
            .pattern
            .clone()
            .or(config.condition.pattern)
            .ok_or_else(|| {
                CliError::ConfigError(
                    "no pattern given; pass --pattern or set [condition] pattern".into(),
                )
            })?;
        let literal = self.literal || config.condition.literal;
        let ignore_case = self.ignore_case || config.condition.ignore_case;
        let condition =
            TextCondition::build(&pattern, literal, ignore_case).map_err(CliError::from)?;

        let mut evaluation = config.evaluation;
        if let Some(size) = self.max_section_size {
            evaluation.max_section_size = size;
        }

        Ok(Settings {
            condition,
            evaluation,
            format: self.format.unwrap_or(config.output.default_format),
            pretty_json: config.output.pretty_json,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running in-process (tests)
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

/// Check one file, streaming its content through the evaluator
pub fn check_file(
    evaluator: &SectionedEvaluator,
    condition: &TextCondition,
    path: &Path,
) -> Result<FileReport> {
    let bytes = FileReader::file_size(path)?;
    let file = FileReader::open(path)?;

    let mut sections_tested = 0;
    let mut matched_section = None;
    let matched = evaluator
        .evaluate(file, |section, index| {
            sections_tested = index + 1;
            let hit = condition.is_match(section);
            if hit {
                matched_section = Some(index);
            }
            Ok(hit)
        })
        .map_err(CliError::from)
        .with_context(|| format!("Failed to check {}", path.display()))?;

    log::debug!(
        "{}: matched={} after {} section(s)",
        path.display(),
        matched,
        sections_tested
    );

    Ok(FileReport {
        path: path.display().to_string(),
        matched,
        matched_section,
        sections_tested,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> CheckArgs {
        CheckArgs {
            input,
            pattern: None,
            literal: false,
            ignore_case: false,
            max_section_size: None,
            output: None,
            format: None,
            parallel: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_check_file_reports_matching_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "Intro text.\n\nMore text.\n\nThe secret is here.").unwrap();

        let evaluator = SectionedEvaluator::with_config(EvaluatorConfig::new(16)).unwrap();
        let condition = TextCondition::new("secret").unwrap();
        let report = check_file(&evaluator, &condition, &path).unwrap();

        assert!(report.matched);
        assert_eq!(report.matched_section, Some(report.sections_tested - 1));
        assert!(report.sections_tested > 1);
    }

    #[test]
    fn test_check_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let evaluator = SectionedEvaluator::new();
        let condition = TextCondition::new("anything").unwrap();
        let report = check_file(&evaluator, &condition, &path).unwrap();

        assert!(!report.matched);
        assert_eq!(report.sections_tested, 1);
        assert_eq!(report.bytes, 0);
    }

    #[test]
    fn test_check_invalid_utf8_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let evaluator = SectionedEvaluator::new();
        let condition = TextCondition::new("x").unwrap();
        let err = check_file(&evaluator, &condition, &path).unwrap_err();

        assert!(err.to_string().contains("Failed to check"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("textgate.toml");
        fs::write(
            &config_path,
            "[evaluation]\nmax_section_size = 100\n\n[condition]\npattern = \"from-config\"\n",
        )
        .unwrap();

        let mut check = args(vec!["unused".into()]);
        check.config = Some(config_path);
        check.max_section_size = Some(7);
        let settings = check.settings().unwrap();
        assert_eq!(settings.condition.as_str(), "from-config");
        assert_eq!(settings.evaluation.max_section_size, 7);

        check.pattern = Some("from-flag".into());
        assert_eq!(check.settings().unwrap().condition.as_str(), "from-flag");
    }

    #[test]
    fn test_literal_flag_escapes_pattern() {
        let mut check = args(vec!["unused".into()]);
        check.pattern = Some("a.b".into());
        check.literal = true;

        let settings = check.settings().unwrap();
        assert!(settings.condition.is_match("xa.by"));
        assert!(!settings.condition.is_match("axb"));
    }

    #[test]
    fn test_missing_pattern_is_config_error() {
        let err = args(vec!["unused".into()]).settings().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_execute_writes_json_report() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha beta").unwrap();
        fs::write(dir.path().join("b.txt"), "gamma delta").unwrap();
        let output = dir.path().join("out.json");

        let mut check = args(vec![format!("{}/*.txt", dir.path().display())]);
        check.pattern = Some("beta".into());
        check.format = Some(OutputFormat::Json);
        check.output = Some(output.clone());
        check.parallel = true;

        assert!(check.execute().unwrap());

        let reports: Vec<FileReport> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].matched);
        assert!(!reports[1].matched);
    }
}
