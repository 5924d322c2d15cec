//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Plain paths without glob metacharacters must exist; patterns may match
/// nothing as long as the whole set is not empty.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = PathBuf::from(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path);
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_glob_and_plain_paths_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("c.md"), "c").unwrap();

        let patterns = vec![
            format!("{}/*.txt", dir.path().display()),
            dir.path().join("a.txt").display().to_string(),
        ];
        let files = resolve_patterns(&patterns).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_missing_plain_path() {
        let err = resolve_patterns(&["/nonexistent/file.txt".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_invalid_glob() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }

    #[test]
    fn test_glob_without_matches() {
        let dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[format!("{}/*.txt", dir.path().display())]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }
}
