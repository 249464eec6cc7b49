//! Git-tracked file oracle
//!
//! Only the tree committed at HEAD counts: working-tree edits and files that
//! are staged but not yet committed are treated as untracked.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use git2::{
    ErrorCode, ObjectType, Repository, RepositoryOpenFlags, TreeWalkMode, TreeWalkResult,
};
use tracing::debug;

use crate::error::{CheckoutError, Result};

/// Environment variable listing directories the repository lookup never climbs into
pub const CEILING_DIRECTORIES_ENV: &str = "GIT_CEILING_DIRECTORIES";

/// Cache of working directory to repository root
///
/// Owned by whoever drives a run; resolving the same working directory
/// twice never touches git again.
#[derive(Debug, Default)]
pub struct RepoRoots {
    roots: HashMap<PathBuf, PathBuf>,
    ceilings: Vec<PathBuf>,
}

impl RepoRoots {
    /// Create an empty cache with no ceiling directories
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache whose lookups stop below any of `ceilings`
    #[must_use]
    pub fn with_ceilings<I, P>(ceilings: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let ceilings = ceilings
            .into_iter()
            .map(|dir| {
                let dir = dir.as_ref();
                dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
            })
            .collect();

        Self {
            roots: HashMap::new(),
            ceilings,
        }
    }

    /// Create an empty cache honouring `GIT_CEILING_DIRECTORIES`, as git does
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(CEILING_DIRECTORIES_ENV) {
            Some(value) => Self::with_ceilings(
                std::env::split_paths(&value).filter(|dir| !dir.as_os_str().is_empty()),
            ),
            None => Self::new(),
        }
    }

    /// Resolve the top level of the repository enclosing `workdir`
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError::NotARepository`] if no repository encloses
    /// `workdir`, or an I/O or git error if the lookup itself fails.
    pub fn resolve(&mut self, workdir: &Path) -> Result<PathBuf> {
        let key = dunce::canonicalize(workdir)
            .with_context(|| format!("Failed to resolve directory: {}", workdir.display()))?;

        if let Some(root) = self.roots.get(&key) {
            return Ok(root.clone());
        }

        let search = Repository::open_ext(&key, RepositoryOpenFlags::empty(), &self.ceilings);
        let repo = match search {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(CheckoutError::NotARepository { workdir: key }.into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to open repository at {}", key.display()));
            }
        };

        // Bare repositories have no working tree to scan
        let Some(root) = repo.workdir() else {
            return Err(CheckoutError::NotARepository { workdir: key }.into());
        };
        let root = dunce::canonicalize(root)
            .with_context(|| format!("Failed to resolve repository root: {}", root.display()))?;

        debug!(workdir = %key.display(), root = %root.display(), "Resolved repository root");
        self.roots.insert(key, root.clone());
        Ok(root)
    }

    /// Number of cached working directories
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True if nothing has been resolved yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Set of root-relative paths committed at HEAD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedFiles {
    paths: HashSet<String>,
}

impl TrackedFiles {
    /// Load every path in the HEAD tree of the repository at `root`
    ///
    /// Blobs and submodule entries are listed, directories are not.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or has no HEAD commit.
    pub fn from_head(root: &Path) -> Result<Self> {
        let repo = Repository::open(root)
            .with_context(|| format!("Failed to open repository at {}", root.display()))?;
        let tree = repo
            .head()
            .and_then(|head| head.peel_to_tree())
            .context("Failed to read the tree committed at HEAD")?;

        let mut paths = HashSet::new();
        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if matches!(entry.kind(), Some(ObjectType::Blob | ObjectType::Commit)) {
                if let Some(name) = entry.name() {
                    paths.insert(format!("{dir}{name}"));
                }
            }
            TreeWalkResult::Ok
        })
        .context("Failed to walk the HEAD tree")?;

        debug!(count = paths.len(), "Loaded tracked files from HEAD");
        Ok(Self { paths })
    }

    /// Build an oracle from an explicit listing of root-relative paths
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// True if the root-relative path is committed at HEAD
    #[must_use]
    pub fn is_tracked(&self, path: &str) -> bool {
        self.paths.contains(path.strip_prefix("./").unwrap_or(path))
    }

    /// Keep only tracked paths, in their original order
    #[must_use]
    pub fn purge_untracked(&self, paths: Vec<String>) -> Vec<String> {
        paths.into_iter().filter(|p| self.is_tracked(p)).collect()
    }

    /// Number of tracked paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if nothing is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Verify that `workdir` is the top level of the expected project and load its tracked files
///
/// # Errors
///
/// Returns a [`CheckoutError`] if `workdir` is not inside a repository, is
/// not the repository's top level, or the top level is not named
/// `expected_project`. Other git or I/O failures propagate as is.
pub fn open_checkout(
    roots: &mut RepoRoots,
    workdir: &Path,
    expected_project: &str,
) -> Result<TrackedFiles> {
    let workdir = dunce::canonicalize(workdir)
        .with_context(|| format!("Failed to resolve directory: {}", workdir.display()))?;
    let root = roots.resolve(&workdir)?;

    if root != workdir {
        return Err(CheckoutError::NotTopLevel { workdir, root }.into());
    }

    let found = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if found != expected_project {
        return Err(CheckoutError::WrongProject {
            expected: expected_project.to_string(),
            found,
        }
        .into());
    }

    TrackedFiles::from_head(&root)
}
