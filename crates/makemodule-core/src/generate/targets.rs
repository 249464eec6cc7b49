//! Fragment builders for each generated target

use std::path::Path;

use tracing::{debug, info, warn};

use super::orchestrator::Generator;
use crate::error::Result;
use crate::filters::{is_header_or_source, is_installable_header, is_source, purge_bookkeeping};
use crate::fragment::{self, BANNER, Declarations, Operator};
use crate::scanner::ScanMode;

const GTEST_ALL_SOURCE: &str = "submodules/googletest/googletest/src/gtest-all.cc";
const CCASM_SOURCE: &str = "apps/ccasm/ccasm.cpp";
const COMPLETER_SOURCE: &str = "apps/completer/complete.cpp";
const COMPLETER_SCRIPT: &str = "apps/completer/casm";
const AUTOVERSION_RULE: &str = "src/casm/version/autoversion.lo: .FORCE";

/// Header declarations for one include directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFragment {
    /// Rendered install-directory and HEADERS declarations
    pub text: String,
    /// Headers declared in `text`, in order
    pub headers: Vec<String>,
}

/// Header declarations for every directory below an include root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    /// Banner-separated fragments, ready to be written
    pub fragment: String,
    /// Every declared header, in declaration order
    pub headers: Vec<String>,
}

fn join_parts(parts: impl IntoIterator<Item = Option<String>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join("\n")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Generator {
    /// `libgtest`, the check-only googletest library
    #[must_use]
    pub fn libgtest(&self) -> String {
        fragment::library(
            "libgtest",
            "check",
            &Declarations::new()
                .with("SOURCES", [GTEST_ALL_SOURCE])
                .with(
                    "CPPFLAGS",
                    [
                        "$(AM_CPPFLAGS)",
                        "-DGTEST_HAS_PTHREAD=0",
                        "-DGTEST_LINKED_AS_SHARED_LIBRARY=1",
                    ],
                ),
        )
    }

    /// `libcasmtesting`, the helpers shared by every unit test
    ///
    /// Takes the tracked headers and sources directly inside the unit-test
    /// root, except the shared test entry point.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit-test root cannot be scanned.
    pub fn libcasmtesting(&self) -> Result<String> {
        let unit_tests = &self.config.unit_tests;

        let candidates = self
            .scanner
            .files(&unit_tests.root, ScanMode::Flat)?
            .into_iter()
            .filter(|f| is_header_or_source(f) && *f != unit_tests.entry_point)
            .collect();
        let sources = self.tracked.purge_untracked(candidates);

        Ok(fragment::library(
            "libcasmtesting",
            "check",
            &Declarations::new()
                .with("SOURCES", sources)
                .with(
                    "CPPFLAGS",
                    [
                        "$(AM_CPPFLAGS)",
                        "-DABS_SRCDIR=\\\"$(abs_srcdir)\\\"",
                        "-DABS_TOP_BUILDDIR=\\\"$(abs_top_builddir)\\\"",
                    ],
                )
                .with("LIBADD", ["libgtest.la"]),
        ))
    }

    /// Executable name for the unit test in `dir`
    #[must_use]
    pub fn unit_test_name(&self, dir: &str) -> String {
        format!("{}{}", self.config.unit_tests.name_prefix, unit_basename(dir))
    }

    /// One unit-test executable built from the files directly in `dir`
    ///
    /// Tracked files ending in the test suffix, plus the shared entry point,
    /// are compiled; every other tracked file ships via `EXTRA_DIST`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be scanned.
    pub fn unit_test(&self, dir: &str) -> Result<String> {
        let unit_tests = &self.config.unit_tests;
        let unit = unit_basename(dir);
        let name = self.unit_test_name(dir);

        let files = self.unit_test_files(dir)?;

        let mut sources: Vec<String> = files
            .iter()
            .filter(|f| f.ends_with(&unit_tests.test_suffix))
            .cloned()
            .collect();
        sources.push(unit_tests.entry_point.clone());

        let extra: Vec<String> = files
            .into_iter()
            .filter(|f| !sources.contains(f))
            .collect();

        let mut ldadd = strings(&["libcasm.la", "libcasmtesting.la"]);
        ldadd.extend_from_slice(self.link.unit_flags(unit));

        let decls = Declarations::new()
            .with("SOURCES", sources)
            .with("LDADD", ldadd)
            .with(
                "CPPFLAGS",
                [
                    "$(AM_CPPFLAGS)".to_string(),
                    format!("-I$(top_srcdir)/{}/", unit_tests.root),
                ],
            );

        Ok(join_parts([
            fragment::tests(&[name.clone()]),
            Some(fragment::program(&name, "check", &decls)),
            fragment::extra_dist(&extra),
        ]))
    }

    /// Tracked files directly in `dir`, minus bookkeeping files
    fn unit_test_files(&self, dir: &str) -> Result<Vec<String>> {
        let files = self
            .tracked
            .purge_untracked(self.scanner.files(dir, ScanMode::Flat)?);
        Ok(purge_bookkeeping(files, &self.config.bookkeeping_files))
    }

    /// Subdirectories of the unit-test root that hold unit tests
    ///
    /// A subdirectory qualifies when it is not excluded and holds at least
    /// one tracked file of its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit-test root or a subdirectory cannot be scanned.
    pub fn unit_test_directories(&self) -> Result<Vec<String>> {
        let mut dirs = Vec::new();
        for dir in self.scanner.subdirectories(&self.config.unit_tests.root)? {
            if self.unit_test_excludes.is_excluded(Path::new(&dir), true) {
                debug!(dir = %dir, "Excluding directory from unit tests");
                continue;
            }
            if self.unit_test_files(&dir)?.is_empty() {
                debug!(dir = %dir, "Skipping directory without tracked files");
                continue;
            }
            dirs.push(dir);
        }
        Ok(dirs)
    }

    /// Everything needed to build and run the unit tests
    ///
    /// # Errors
    ///
    /// Returns an error if any unit-test directory cannot be scanned.
    pub fn aggregated_unit_tests(&self) -> Result<String> {
        let mut value = String::from(BANNER);

        info!("Create Makefile segment for libgtest");
        value.push_str(&self.libgtest());
        value.push_str(BANNER);

        info!("Create Makefile segment for libcasmtesting");
        value.push_str(&self.libcasmtesting()?);
        value.push_str(BANNER);

        for dir in self.unit_test_directories()? {
            info!("Create Makefile segment for unit test {dir}");
            value.push_str(&self.unit_test(&dir)?);
            value.push_str(BANNER);
        }

        Ok(value)
    }

    /// Header declarations for the files directly in `dir`
    ///
    /// Returns `None` when the directory holds no tracked headers.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not below `include/` or cannot be scanned.
    pub fn include(&self, dir: &str) -> Result<Option<HeaderFragment>> {
        let Some(install_subdir) = dir.strip_prefix("include/") else {
            anyhow::bail!("Header directory must start with 'include/': {dir}");
        };

        let candidates = self.scanner.files(dir, ScanMode::Flat)?;
        let headers: Vec<String> = self
            .tracked
            .purge_untracked(candidates)
            .into_iter()
            .filter(|f| is_installable_header(f, &self.config.vendored_header_dir))
            .collect();

        Ok(
            fragment::headers(install_subdir, &headers)
                .map(|text| HeaderFragment { text, headers }),
        )
    }

    /// Header declarations for `root` and every directory below it
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be scanned.
    pub fn recursive_include(&self, root: &str) -> Result<HeaderSet> {
        let mut set = HeaderSet {
            fragment: String::from(BANNER),
            headers: Vec::new(),
        };

        for dir in self.scanner.directories(root)? {
            info!("Create Makefile segment for headers in {dir}");
            match self.include(&dir)? {
                Some(found) => {
                    set.fragment.push_str(&found.text);
                    set.fragment.push_str(BANNER);
                    set.headers.extend(found.headers);
                }
                None => info!("Skipping {dir} because there are no headers there"),
            }
        }

        Ok(set)
    }

    /// A library built from every tracked source below `search_root`
    ///
    /// `extra_sources` (normally the library's headers) follow the scanned
    /// sources in SOURCES; `decls` adds further keywords after it.
    ///
    /// # Errors
    ///
    /// Returns an error if `search_root` cannot be scanned.
    pub fn lib(
        &self,
        libname: &str,
        search_root: &str,
        extra_sources: &[String],
        decls: &Declarations,
    ) -> Result<String> {
        let candidates = self
            .scanner
            .files(search_root, ScanMode::Recursive)?
            .into_iter()
            .filter(|f| is_source(f))
            .collect();
        let mut sources = self.tracked.purge_untracked(candidates);
        sources.extend_from_slice(extra_sources);

        let mut all = Declarations::new().with("SOURCES", sources);
        for (keyword, values) in decls.iter() {
            all.push(keyword, values.iter().cloned());
        }

        Ok(fragment::library(libname, "lib", &all))
    }

    /// `libcasm`, from `src/casm` plus the `include/casm` headers
    ///
    /// # Errors
    ///
    /// Returns an error if `src/casm` cannot be scanned.
    pub fn libcasm(&self, headers: &[String]) -> Result<String> {
        info!("Create Makefile segment for libcasm");
        self.lib(
            "libcasm",
            "src/casm",
            headers,
            &Declarations::new()
                .with("LIBADD", self.link.default_flags().iter().cloned())
                .with("LDFLAGS", ["-avoid-version", "$(BOOST_LDFLAGS)"]),
        )
    }

    /// `libccasm`, from `src/ccasm` plus the `include/ccasm` headers
    ///
    /// # Errors
    ///
    /// Returns an error if `src/ccasm` cannot be scanned.
    pub fn libccasm(&self, headers: &[String]) -> Result<String> {
        info!("Create Makefile segment for libccasm");
        let mut value = self.lib(
            "libccasm",
            "src/ccasm",
            headers,
            &Declarations::new().with("LDFLAGS", ["-avoid-version"]),
        )?;
        value.push('\n');
        value.push_str(AUTOVERSION_RULE);
        Ok(value)
    }

    /// The `ccasm` command-line program
    #[must_use]
    pub fn ccasm(&self) -> String {
        info!("Create Makefile for ccasm program");
        self.warn_untracked(&[CCASM_SOURCE]);

        fragment::program(
            "ccasm",
            "bin",
            &Declarations::new()
                .with("SOURCES", [CCASM_SOURCE])
                .with("LDADD", self.main_library_ldadd()),
        )
    }

    /// The `casm-complete` program and its bash completion script
    ///
    /// Only built when bash completion is enabled at configure time.
    #[must_use]
    pub fn casm_complete(&self) -> String {
        info!("Create Makefile for casm-complete program");
        self.warn_untracked(&[COMPLETER_SOURCE, COMPLETER_SCRIPT]);

        let program = fragment::program(
            "casm-complete",
            "bin",
            &Declarations::new()
                .with("SOURCES", [COMPLETER_SOURCE])
                .with("LDADD", self.main_library_ldadd()),
        );

        format!(
            "if ENABLE_BASH_COMPLETION\nbashcompletiondir=$(BASH_COMPLETION_DIR)\n\n{}\n{program}\n\nendif",
            fragment::declaration(
                "dist_bashcompletion_DATA",
                Operator::Assign,
                &[COMPLETER_SCRIPT]
            ),
        )
    }

    fn main_library_ldadd(&self) -> Vec<String> {
        let mut ldadd = strings(&["libcasm.la"]);
        ldadd.extend_from_slice(self.link.default_flags());
        ldadd
    }

    fn warn_untracked(&self, paths: &[&str]) {
        for path in paths {
            if !self.tracked.is_tracked(path) {
                warn!(path = %path, "Fixed source is not tracked by git");
            }
        }
    }
}

/// Base name of a unit-test directory, ignoring trailing separators
fn unit_basename(dir: &str) -> &str {
    let trimmed = dir.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
