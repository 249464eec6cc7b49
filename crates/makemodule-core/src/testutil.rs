//! Test utilities for makemodule-core.
//!
//! Helpers that lay out a fake project tree on disk and commit part of it
//! to a real git repository.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

/// Directory name the default configuration expects for the checkout
pub const PROJECT: &str = "CASMcode-dev";

/// Create `<tmp>/<name>` and return both, keeping the tempdir alive
pub fn project_dir(name: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(name);
    fs::create_dir(&root).unwrap();
    (tmp, root)
}

/// Write a file (creating parent directories) relative to `root`
pub fn write_file(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, rel).unwrap();
}

/// Initialise a repository at `root` and commit the given files
///
/// Files are written to disk first. Anything else present in the working
/// tree stays untracked.
pub fn commit_files(root: &Path, files: &[&str]) -> Repository {
    let repo = Repository::init(root).unwrap();
    {
        let mut index = repo.index().unwrap();
        for rel in files {
            write_file(root, rel);
            index.add_path(Path::new(rel)).unwrap();
        }
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("makemodule", "makemodule@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }
    repo
}

/// Stage a file without committing it
pub fn stage_file(repo: &Repository, root: &Path, rel: &str) {
    write_file(root, rel);
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(rel)).unwrap();
    index.write().unwrap();
}
