use anyhow::Context;
use makemodule_core::config::ConfigDiscovery;

use super::RunOptions;

pub struct Config;

impl Config {
    pub fn execute(options: &RunOptions<'_>) -> anyhow::Result<()> {
        let source = if options.no_config {
            None
        } else {
            ConfigDiscovery::discover(options.directory, options.config_path)?
        };

        let config = options.load_config()?;
        let rendered =
            toml::to_string_pretty(&config).context("Failed to render configuration")?;

        match source {
            Some(path) => println!("# Loaded from {}", path.display()),
            None => println!("# Built-in defaults"),
        }
        println!("{rendered}");

        Ok(())
    }
}
