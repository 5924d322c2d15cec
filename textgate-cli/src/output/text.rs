//! Plain text output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one line per file
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &FileReport) -> Result<()> {
        let plural = if report.sections_tested == 1 { "" } else { "s" };
        match report.matched_section {
            Some(index) => writeln!(
                self.writer,
                "{}: match in section {} ({} section{} tested)",
                report.path, index, report.sections_tested, plural
            )?,
            None => writeln!(
                self.writer,
                "{}: no match ({} section{} tested)",
                report.path, report.sections_tested, plural
            )?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
