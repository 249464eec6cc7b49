//! Configuration validation and error reporting

use super::types::Config;
use crate::error::Result;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new config validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        if config.project_name.trim().is_empty() {
            anyhow::bail!("project_name cannot be empty");
        }
        if config.project_name.contains('/') {
            anyhow::bail!(
                "project_name must be a directory name, not a path: '{}'",
                config.project_name
            );
        }

        for lib in &config.boost_libs {
            if lib.trim().is_empty() {
                anyhow::bail!("Boost library name cannot be empty");
            }
        }

        if config.vendored_header_dir.trim().is_empty() {
            anyhow::bail!("vendored_header_dir cannot be empty");
        }

        for name in &config.bookkeeping_files {
            if name.trim().is_empty() || name.contains('/') {
                anyhow::bail!("Bookkeeping file must be a base name: '{name}'");
            }
        }

        let unit_tests = &config.unit_tests;
        for (field, value) in [
            ("unit_tests.root", &unit_tests.root),
            ("unit_tests.test_suffix", &unit_tests.test_suffix),
            ("unit_tests.entry_point", &unit_tests.entry_point),
            ("unit_tests.name_prefix", &unit_tests.name_prefix),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{field} cannot be empty");
            }
        }

        for pattern in &unit_tests.exclude {
            if pattern.trim().is_empty() {
                anyhow::bail!("Exclude pattern cannot be empty");
            }
        }

        for (unit, flags) in &unit_tests.link {
            if flags.iter().any(|flag| flag.trim().is_empty()) {
                anyhow::bail!("Link flags for unit test '{unit}' contain an empty entry");
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_project_name() {
        let mut config = Config::default();
        config.project_name = "  ".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.unwrap_err().to_string().contains("project_name"));
    }

    #[test]
    fn test_validate_project_name_path() {
        let mut config = Config::default();
        config.project_name = "src/CASMcode-dev".to_string();

        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_validate_bookkeeping_with_slash() {
        let mut config = Config::default();
        config.bookkeeping_files.push("tests/.gitignore".to_string());

        let result = ConfigValidator::validate(&config);
        assert!(result.unwrap_err().to_string().contains("base name"));
    }

    #[test]
    fn test_validate_empty_test_suffix() {
        let mut config = Config::default();
        config.unit_tests.test_suffix = String::new();

        let result = ConfigValidator::validate(&config);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("unit_tests.test_suffix")
        );
    }

    #[test]
    fn test_validate_empty_exclude_pattern() {
        let mut config = Config::default();
        config.unit_tests.exclude.push(String::new());

        let result = ConfigValidator::validate(&config);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_empty_link_flag() {
        let mut config = Config::default();
        config
            .unit_tests
            .link
            .insert("App".to_string(), vec![" ".to_string()]);

        let result = ConfigValidator::validate(&config);
        assert!(result.unwrap_err().to_string().contains("'App'"));
    }
}
