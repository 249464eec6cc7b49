//! Gitignore-style pattern matching using the ignore crate

use std::path::Path;

use anyhow::Context;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// Matcher for directories excluded from a scan
pub struct PatternMatcher {
    gitignore: Option<Gitignore>,
}

impl PatternMatcher {
    /// Create a matcher that excludes nothing
    #[must_use]
    pub const fn new() -> Self {
        Self { gitignore: None }
    }

    /// Build a matcher from exclusion patterns
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn with_excludes(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self::new());
        }

        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            builder
                .add_line(None, pattern)
                .with_context(|| format!("Invalid exclude pattern: '{pattern}'"))?;
        }

        let gitignore = builder.build()?;
        Ok(Self {
            gitignore: Some(gitignore),
        })
    }

    /// Check if a root-relative path is excluded
    ///
    /// Parent directories are consulted too, so excluding `test_projects`
    /// also excludes everything below it.
    #[must_use]
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore
            .as_ref()
            .is_some_and(|gi| gi.matched_path_or_any_parents(path, is_dir).is_ignore())
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
