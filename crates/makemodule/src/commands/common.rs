//! Common types and utilities for command execution

use std::path::Path;

use anyhow::Context;
use makemodule_core::config::{Config, ConfigManager};
use makemodule_core::generate::Generator;

/// Execution options shared by every command
pub struct RunOptions<'a> {
    /// Preview changes without writing (dry-run)
    pub dry_run: bool,
    /// Directory the run treats as the checkout's top level
    pub directory: &'a Path,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
}

impl<'a> RunOptions<'a> {
    /// Create new run options
    #[must_use]
    pub const fn new(
        dry_run: bool,
        directory: &'a Path,
        config_path: Option<&'a Path>,
        no_config: bool,
    ) -> Self {
        Self {
            dry_run,
            directory,
            config_path,
            no_config,
        }
    }

    /// Load the configuration for this run
    pub fn load_config(&self) -> anyhow::Result<Config> {
        ConfigManager::load(self.directory, self.config_path, self.no_config)
            .context("Failed to load configuration")
    }

    /// Load the configuration and open the checkout
    pub fn open_generator(&self) -> anyhow::Result<Generator> {
        let config = self.load_config()?;
        Generator::open(self.directory, config)
    }
}
