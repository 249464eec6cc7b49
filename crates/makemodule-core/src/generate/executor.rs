//! Output file writer and staleness check

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use similar::TextDiff;
use tracing::{debug, info};

use super::{GeneratedFile, GenerationResult};
use crate::error::Result;

/// Writes generated files, or compares them with what is on disk
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    /// Create a new writer
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Overwrite one output file with its generated content
    ///
    /// Files are always rewritten in full, even when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be written.
    pub fn write(
        &self,
        workdir: &Path,
        file: &GeneratedFile,
        result: &mut GenerationResult,
    ) -> Result<()> {
        let path = workdir.join(&file.path);

        if self.dry_run {
            info!(
                path = %file.path,
                bytes = file.content.len(),
                "[DRY RUN] Would write"
            );
            result.skipped += 1;
            return Ok(());
        }

        let unchanged = fs::read_to_string(&path).is_ok_and(|existing| existing == file.content);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if unchanged {
            debug!(path = %file.path, "Rewrote unchanged file");
            result.unchanged += 1;
        } else {
            info!(path = %file.path, "Wrote file");
            result.written += 1;
        }

        Ok(())
    }

    /// Compare one output file with its generated content
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read.
    pub fn check(
        &self,
        workdir: &Path,
        file: &GeneratedFile,
        result: &mut GenerationResult,
    ) -> Result<()> {
        let path = workdir.join(&file.path);

        match fs::read_to_string(&path) {
            Ok(existing) if existing == file.content => result.up_to_date += 1,
            Ok(existing) => {
                let diff = unified_diff(&file.path, &existing, &file.content);
                result.stale.push((file.path.clone(), diff));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => result.missing.push(file.path.clone()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        }

        Ok(())
    }
}

fn unified_diff(path: &str, existing: &str, generated: &str) -> String {
    TextDiff::from_lines(existing, generated)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> GeneratedFile {
        GeneratedFile::new("apps/ccasm/Makemodule.am", "bin_PROGRAMS +=\\\n               ccasm")
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let mut result = GenerationResult::default();

        FileWriter::new(false)
            .write(tmp.path(), &sample(), &mut result)
            .unwrap();

        let written = fs::read_to_string(tmp.path().join("apps/ccasm/Makemodule.am")).unwrap();
        assert_eq!(written, sample().content);
        assert_eq!(result.written, 1);
    }

    #[test]
    fn test_write_twice_reports_unchanged() {
        let tmp = TempDir::new().unwrap();
        let mut result = GenerationResult::default();
        let writer = FileWriter::new(false);

        writer.write(tmp.path(), &sample(), &mut result).unwrap();
        writer.write(tmp.path(), &sample(), &mut result).unwrap();

        assert_eq!(result.written, 1);
        assert_eq!(result.unchanged, 1);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut result = GenerationResult::default();

        FileWriter::new(true)
            .write(tmp.path(), &sample(), &mut result)
            .unwrap();

        assert!(!tmp.path().join("apps").exists());
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_check_missing_and_up_to_date() {
        let tmp = TempDir::new().unwrap();
        let writer = FileWriter::new(false);

        let mut before = GenerationResult::default();
        writer.check(tmp.path(), &sample(), &mut before).unwrap();
        assert_eq!(before.missing, vec!["apps/ccasm/Makemodule.am".to_string()]);

        writer
            .write(tmp.path(), &sample(), &mut GenerationResult::default())
            .unwrap();

        let mut after = GenerationResult::default();
        writer.check(tmp.path(), &sample(), &mut after).unwrap();
        assert_eq!(after.up_to_date, 1);
        assert!(after.is_up_to_date());
    }

    #[test]
    fn test_check_stale_includes_diff() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("apps/ccasm/Makemodule.am");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "bin_PROGRAMS +=\\\n               old").unwrap();

        let mut result = GenerationResult::default();
        FileWriter::new(false)
            .check(tmp.path(), &sample(), &mut result)
            .unwrap();

        assert!(!result.is_up_to_date());
        let (stale_path, diff) = &result.stale[0];
        assert_eq!(stale_path, "apps/ccasm/Makemodule.am");
        assert!(diff.contains("-               old"));
        assert!(diff.contains("+               ccasm"));
    }
}
