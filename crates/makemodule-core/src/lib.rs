//! # makemodule-core
//!
//! Core library for the automake module generator.
//!
//! This library walks a git-tracked C++ source tree and renders the
//! `Makemodule.am` fragments that declare its libraries, headers,
//! programs and unit tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the makemodule library
pub mod error {
    use std::path::PathBuf;

    /// Result type alias using `anyhow::Error`
    pub type Result<T> = anyhow::Result<T>;

    /// The working directory is not a usable checkout of the project.
    ///
    /// This is the only failure the generator treats as a user error; every
    /// other failure propagates as a plain `anyhow::Error`.
    #[derive(Debug, thiserror::Error)]
    pub enum CheckoutError {
        /// No git repository encloses the working directory
        #[error("{} is not inside a git repository", .workdir.display())]
        NotARepository {
            /// Directory the search started from
            workdir: PathBuf,
        },

        /// The working directory is below the repository's top level
        #[error("{} is not the top level of its repository ({})", .workdir.display(), .root.display())]
        NotTopLevel {
            /// Directory the search started from
            workdir: PathBuf,
            /// Top level of the enclosing repository
            root: PathBuf,
        },

        /// The repository's top-level directory has an unexpected name
        #[error("repository directory is named '{found}', expected '{expected}'")]
        WrongProject {
            /// Configured project name
            expected: String,
            /// Actual directory name of the repository
            found: String,
        },
    }
}

/// Fragment rendering in the automake continuation-line grammar
pub mod fragment;

/// Extension and bookkeeping-file predicates
pub mod filters;

/// Git-tracked file oracle
pub mod tracked;

/// Directory scanning
pub mod scanner;

/// Configuration file parsing and validation
pub mod config;

/// Fragment generation for every output target
pub mod generate;

#[cfg(test)]
mod testutil;
