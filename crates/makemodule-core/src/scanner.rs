//! Directory scanning for the generator
//!
//! Every scan returns `/`-separated paths relative to the working directory,
//! in file-name order, so repeated runs produce identical output:
//! - flat: the files directly inside one directory
//! - one level: the immediate subdirectories of one directory
//! - recursive: every file, or every directory, below a root

mod flat;
mod recursive;

#[cfg(test)]
mod integration_tests;

use std::path::{Component, Path, PathBuf};

use tracing::warn;
use walkdir::DirEntry;

use crate::error::Result;

/// How far below a directory a file scan descends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Only files directly inside the directory
    Flat,
    /// Every file below the directory
    Recursive,
}

/// Scanner rooted at the working directory
#[derive(Debug, Clone)]
pub struct Scanner {
    workdir: PathBuf,
}

impl Scanner {
    /// Create a scanner for paths relative to `workdir`
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Directory every returned path is relative to
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// List files under `dir` with the given mode
    ///
    /// A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if directory traversal fails.
    pub fn files(&self, dir: &str, mode: ScanMode) -> Result<Vec<String>> {
        let base = self.workdir.join(dir);
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        match mode {
            ScanMode::Flat => flat::files(&self.workdir, &base),
            ScanMode::Recursive => recursive::files(&self.workdir, &base),
        }
    }

    /// List the immediate subdirectories of `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if directory traversal fails.
    pub fn subdirectories(&self, dir: &str) -> Result<Vec<String>> {
        let base = self.workdir.join(dir);
        if !base.is_dir() {
            return Ok(Vec::new());
        }
        flat::subdirectories(&self.workdir, &base)
    }

    /// List `root` and every directory below it, parents before children
    ///
    /// # Errors
    ///
    /// Returns an error if directory traversal fails.
    pub fn directories(&self, root: &str) -> Result<Vec<String>> {
        let base = self.workdir.join(root);
        if !base.is_dir() {
            return Ok(Vec::new());
        }
        recursive::directories(&self.workdir, &base)
    }
}

/// Convert an absolute entry path into a `/`-separated workdir-relative string
///
/// Paths that are not valid UTF-8 cannot be written into a fragment and are
/// skipped with a warning.
fn relative(workdir: &Path, path: &Path) -> Option<String> {
    let Ok(rel) = path.strip_prefix(workdir) else {
        warn!(path = %path.display(), "Skipping path outside the working directory");
        return None;
    };

    let parts: Option<Vec<&str>> = rel
        .components()
        .map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    if parts.is_none() {
        warn!(path = %path.display(), "Skipping path that is not valid UTF-8");
    }
    parts.map(|parts| parts.join("/"))
}

/// True for regular files and for symlinks pointing at regular files
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
