//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Route formatted output to stdout or a file.
//! - Atomic file writing.

use anyhow::{Context, Result};

/// Print the output, or write it to `output_file` when one was given.
pub fn output_result(output: &str, output_file: Option<&std::path::PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to a temp file then renames
/// so a failed write never leaves a truncated export behind.
pub fn write_to_file(content: &str, path: &std::path::Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent_dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));

    if !parent_dir.as_os_str().is_empty() && parent_dir != std::path::Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(if parent_dir.as_os_str().is_empty() {
        std::path::Path::new(".")
    } else {
        parent_dir
    })
    .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write output to temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to move output into place at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports/2025/events.csv");
        write_to_file("id,name\n", &nested).unwrap();
        assert_eq!(std::fs::read_to_string(&nested).unwrap(), "id,name\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        write_to_file("old", &path).unwrap();
        write_to_file("new", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
