//! Path predicates used while scanning the source tree

use std::path::Path;

/// Extensions of files installed as headers
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx"];

/// Extensions of files compiled as sources
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cxx", "cpp"];

/// Version-control bookkeeping files that never belong in a build declaration
pub const DEFAULT_BOOKKEEPING_FILES: &[&str] =
    &[".gitignore", ".gitattributes", ".gitmodules", ".gitkeep"];

/// Pattern for matching file paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Match files with a specific extension (e.g., "hpp")
    Extension(String),
    /// Match files with a specific name (e.g., ".gitignore")
    FileName(String),
}

impl Pattern {
    /// Check if this pattern matches the given path
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Extension(ext) => path.extension().is_some_and(|e| e == ext.as_str()),
            Self::FileName(name) => path.file_name().is_some_and(|n| n == name.as_str()),
        }
    }
}

fn has_extension(path: &str, extensions: &[&str]) -> bool {
    extensions
        .iter()
        .any(|ext| Pattern::Extension((*ext).to_string()).matches(Path::new(path)))
}

/// True if the path ends in a header extension
#[must_use]
pub fn is_header(path: &str) -> bool {
    has_extension(path, HEADER_EXTENSIONS)
}

/// True if the path ends in a source extension
#[must_use]
pub fn is_source(path: &str) -> bool {
    has_extension(path, SOURCE_EXTENSIONS)
}

/// True if the path ends in either a header or a source extension
#[must_use]
pub fn is_header_or_source(path: &str) -> bool {
    is_header(path) || is_source(path)
}

/// True if the file sits directly in the vendored header directory
///
/// That one directory ships headers without any extension (`Eigen/Dense`,
/// `Eigen/Core`, ...). No other directory gets this treatment.
#[must_use]
pub fn is_extensionless_vendored_header(path: &str, vendored_dir: &str) -> bool {
    Path::new(path).parent() == Some(Path::new(vendored_dir))
}

/// True if the file should be installed as a header
#[must_use]
pub fn is_installable_header(path: &str, vendored_dir: &str) -> bool {
    is_extensionless_vendored_header(path, vendored_dir) || is_header(path)
}

/// Drop bookkeeping files (matched by base name), keeping everything else in order
#[must_use]
pub fn purge_bookkeeping<S: AsRef<str>>(paths: Vec<String>, names: &[S]) -> Vec<String> {
    let patterns: Vec<Pattern> = names
        .iter()
        .map(|name| Pattern::FileName(name.as_ref().to_string()))
        .collect();

    paths
        .into_iter()
        .filter(|path| !patterns.iter().any(|p| p.matches(Path::new(path))))
        .collect()
}
