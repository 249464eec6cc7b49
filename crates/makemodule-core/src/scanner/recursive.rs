//! Recursive scans below a root directory

use std::path::Path;

use walkdir::WalkDir;

use super::{is_file, relative};
use crate::error::Result;

/// List every file below `base`
///
/// # Errors
///
/// Returns an error if directory traversal fails due to permission issues
/// or I/O errors.
pub fn files(workdir: &Path, base: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(base).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if is_file(&entry) {
            files.extend(relative(workdir, entry.path()));
        }
    }

    Ok(files)
}

/// List `base` and every directory below it in pre-order
///
/// # Errors
///
/// Returns an error if directory traversal fails.
pub fn directories(workdir: &Path, base: &Path) -> Result<Vec<String>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(base).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.extend(relative(workdir, entry.path()));
        }
    }

    Ok(dirs)
}
