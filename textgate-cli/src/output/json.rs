//! JSON output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs file reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<FileReport>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            reports: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &FileReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
