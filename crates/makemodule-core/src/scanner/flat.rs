//! Single-level scans: files directly in a directory, and its subdirectories

use std::path::Path;

use walkdir::WalkDir;

use super::{is_file, relative};
use crate::error::Result;

/// List the files directly inside `base`
///
/// # Errors
///
/// Returns an error if reading the directory fails.
pub fn files(workdir: &Path, base: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if is_file(&entry) {
            files.extend(relative(workdir, entry.path()));
        }
    }

    Ok(files)
}

/// List the immediate subdirectories of `base`
///
/// # Errors
///
/// Returns an error if reading the directory fails.
pub fn subdirectories(workdir: &Path, base: &Path) -> Result<Vec<String>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.extend(relative(workdir, entry.path()));
        }
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_files_ignores_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("tests/unit");
        fs::create_dir_all(base.join("App")).unwrap();
        fs::write(base.join("gtest_main_run_all.cpp"), "main").unwrap();
        fs::write(base.join("App").join("App_test.cpp"), "test").unwrap();

        let found = files(tmp.path(), &base).unwrap();
        assert_eq!(found, vec!["tests/unit/gtest_main_run_all.cpp".to_string()]);
    }

    #[test]
    fn test_subdirectories_sorted() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("tests/unit");
        fs::create_dir_all(base.join("clex")).unwrap();
        fs::create_dir_all(base.join("App")).unwrap();
        fs::create_dir_all(base.join("App").join("nested")).unwrap();
        fs::write(base.join("README"), "readme").unwrap();

        let found = subdirectories(tmp.path(), &base).unwrap();
        assert_eq!(
            found,
            vec!["tests/unit/App".to_string(), "tests/unit/clex".to_string()]
        );
    }
}
