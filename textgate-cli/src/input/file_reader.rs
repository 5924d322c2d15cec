//! File access for streamed evaluation

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;

/// Opens files for streaming; content is never read whole
pub struct FileReader;

impl FileReader {
    /// Open a file for reading
    pub fn open(path: &Path) -> Result<File> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
