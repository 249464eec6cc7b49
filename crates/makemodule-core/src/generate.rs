//! Makemodule generation engine
//!
//! The orchestrator builds every output in memory first; only once the
//! whole plan exists does the executor touch the filesystem. A scan or git
//! failure therefore never leaves a half-regenerated tree behind.

mod executor;
mod link;
mod orchestrator;
mod reporting;
mod targets;


pub use executor::FileWriter;
pub use link::LinkPolicy;
pub use orchestrator::Generator;
pub use reporting::GenerationReporter;
pub use targets::{HeaderFragment, HeaderSet};

/// Output of the `ccasm` program target
pub const CCASM_MAKEMODULE: &str = "apps/ccasm/Makemodule.am";
/// Output of the `casm-complete` program target
pub const COMPLETER_MAKEMODULE: &str = "apps/completer/Makemodule.am";
/// Output of the `include/casm` header target
pub const CASM_HEADERS_MAKEMODULE: &str = "include/casm/Makemodule.am";
/// Output of the `libcasm` library target
pub const LIBCASM_MAKEMODULE: &str = "src/casm/Makemodule.am";
/// Output of the `include/ccasm` header target
pub const CCASM_HEADERS_MAKEMODULE: &str = "include/ccasm/Makemodule.am";
/// Output of the `libccasm` library target
pub const LIBCCASM_MAKEMODULE: &str = "src/ccasm/Makemodule.am";

/// One output file and its freshly rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Workdir-relative output path
    pub path: String,
    /// Full file content
    pub content: String,
}

impl GeneratedFile {
    /// Pair an output path with its content
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Generation result with statistics
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    /// Files written with new content
    pub written: usize,
    /// Files rewritten with identical content
    pub unchanged: usize,
    /// Files not written because of a dry run
    pub skipped: usize,
    /// Files whose content already matches (check mode)
    pub up_to_date: usize,
    /// Outputs missing on disk (check mode)
    pub missing: Vec<String>,
    /// Outputs whose content differs, with their unified diffs (check mode)
    pub stale: Vec<(String, String)>,
}

impl GenerationResult {
    /// Total files handled
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.written
            + self.unchanged
            + self.skipped
            + self.up_to_date
            + self.missing.len()
            + self.stale.len()
    }

    /// Whether every checked output matches what would be generated
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }
}
