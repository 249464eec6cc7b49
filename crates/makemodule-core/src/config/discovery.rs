//! Configuration file discovery

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".makemodule.toml";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Create a new config discovery instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Find the configuration file to load, if any
    ///
    /// A path given on the command line wins and must exist. Otherwise
    /// `.makemodule.toml` in the working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config path does not exist.
    pub fn discover(workdir: &Path, cli_path: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = cli_path {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let candidate = workdir.join(PROJECT_CONFIG_FILE);
        Ok(candidate.is_file().then_some(candidate))
    }
}

impl Default for ConfigDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
