//! Generation orchestration - coordinates the whole regeneration pass

use std::path::{Path, PathBuf};

use tracing::info;

use super::link::LinkPolicy;
use super::{
    CASM_HEADERS_MAKEMODULE, CCASM_HEADERS_MAKEMODULE, CCASM_MAKEMODULE, COMPLETER_MAKEMODULE,
    GeneratedFile, LIBCASM_MAKEMODULE, LIBCCASM_MAKEMODULE,
};
use crate::config::{Config, PatternMatcher};
use crate::error::Result;
use crate::scanner::Scanner;
use crate::tracked::{RepoRoots, TrackedFiles, open_checkout};

/// Main generation engine
pub struct Generator {
    pub(super) config: Config,
    pub(super) scanner: Scanner,
    pub(super) tracked: TrackedFiles,
    pub(super) link: LinkPolicy,
    pub(super) unit_test_excludes: PatternMatcher,
}

impl Generator {
    /// Open the checkout at `workdir` and prepare a generator for it
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::CheckoutError`] if `workdir` is not the top
    /// level of a checkout of the configured project, or another error if
    /// git cannot be read or a pattern is invalid.
    pub fn open(workdir: &Path, config: Config) -> Result<Self> {
        let mut roots = RepoRoots::from_env();
        let tracked = open_checkout(&mut roots, workdir, &config.project_name)?;
        // Cached by the guard above
        let root = roots.resolve(workdir)?;

        info!(root = %root.display(), tracked = tracked.len(), "Opened checkout");
        Self::build(root, config, tracked)
    }

    /// Prepare a generator over an explicit tracked-file listing
    ///
    /// Skips the checkout guard; `workdir` is scanned as is.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclusion pattern is invalid.
    pub fn with_tracked(workdir: &Path, config: Config, tracked: TrackedFiles) -> Result<Self> {
        Self::build(workdir.to_path_buf(), config, tracked)
    }

    fn build(workdir: PathBuf, config: Config, tracked: TrackedFiles) -> Result<Self> {
        let unit_test_excludes = PatternMatcher::with_excludes(&config.unit_tests.exclude)?;
        let link = LinkPolicy::from_config(&config);

        Ok(Self {
            scanner: Scanner::new(workdir),
            config,
            tracked,
            link,
            unit_test_excludes,
        })
    }

    /// Directory every output path is relative to
    #[must_use]
    pub fn workdir(&self) -> &Path {
        self.scanner.workdir()
    }

    /// Path of the aggregated unit-test makemodule
    #[must_use]
    pub fn unit_tests_makemodule(&self) -> String {
        format!("{}/Makemodule.am", self.config.unit_tests.root)
    }

    /// Render every output file without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if scanning any target fails.
    pub fn plan(&self) -> Result<Vec<GeneratedFile>> {
        let mut files = Vec::with_capacity(7);

        files.push(GeneratedFile::new(CCASM_MAKEMODULE, self.ccasm()));
        files.push(GeneratedFile::new(
            COMPLETER_MAKEMODULE,
            self.casm_complete(),
        ));
        files.push(GeneratedFile::new(
            self.unit_tests_makemodule(),
            self.aggregated_unit_tests()?,
        ));

        let casm_headers = self.recursive_include("include/casm")?;
        let libcasm = self.libcasm(&casm_headers.headers)?;
        files.push(GeneratedFile::new(
            CASM_HEADERS_MAKEMODULE,
            casm_headers.fragment,
        ));
        files.push(GeneratedFile::new(LIBCASM_MAKEMODULE, libcasm));

        let ccasm_headers = self.recursive_include("include/ccasm")?;
        let libccasm = self.libccasm(&ccasm_headers.headers)?;
        files.push(GeneratedFile::new(
            CCASM_HEADERS_MAKEMODULE,
            ccasm_headers.fragment,
        ));
        files.push(GeneratedFile::new(LIBCCASM_MAKEMODULE, libccasm));

        Ok(files)
    }
}
