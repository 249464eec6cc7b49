//! Configuration file parsing, discovery and validation
//!
//! This module handles:
//! - Config file discovery (`--config` or `.makemodule.toml`)
//! - TOML parsing with serde
//! - Gitignore-style exclusion patterns
//! - Validation and error reporting

mod discovery;
mod patterns;
mod types;
mod validation;

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

pub use discovery::{ConfigDiscovery, PROJECT_CONFIG_FILE};
pub use patterns::PatternMatcher;
pub use types::{Config, DEFAULT_BOOST_LIBS, UnitTestConfig};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load the configuration for a run in `workdir`
    ///
    /// With `no_config` set, discovery is skipped and the built-in defaults
    /// are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is missing, unreadable or invalid.
    pub fn load(workdir: &Path, cli_config_path: Option<&Path>, no_config: bool) -> Result<Config> {
        if no_config {
            return Ok(Config::default());
        }

        let config = match ConfigDiscovery::discover(workdir, cli_config_path)? {
            Some(path) => Self::parse_file(&path)?,
            None => Config::default(),
        };

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parse a single config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn parse_file(path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "Loading configuration");

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_files() {
        let tmp = TempDir::new().unwrap();
        let config = ConfigManager::load(tmp.path(), None, false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(PROJECT_CONFIG_FILE),
            r#"
project_name = "CASMcode"
boost_libs = ["SYSTEM"]
"#,
        )
        .unwrap();

        let config = ConfigManager::load(tmp.path(), None, false).unwrap();

        assert_eq!(config.project_name, "CASMcode");
        assert_eq!(config.boost_libs, vec!["SYSTEM".to_string()]);
    }

    #[test]
    fn test_no_config_ignores_project_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(PROJECT_CONFIG_FILE), "project_name = \"x\"").unwrap();

        let config = ConfigManager::load(tmp.path(), None, true).unwrap();
        assert_eq!(config.project_name, "CASMcode-dev");
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "project_name = [").unwrap();

        let err = ConfigManager::load(tmp.path(), Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty-name.toml");
        fs::write(&path, "project_name = \"\"").unwrap();

        let err = ConfigManager::load(tmp.path(), Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("project_name cannot be empty"));
    }
}
