//! Configuration types and structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filters::DEFAULT_BOOKKEEPING_FILES;

/// Boost libraries every target links against unless told otherwise
pub const DEFAULT_BOOST_LIBS: &[&str] = &["SYSTEM", "FILESYSTEM", "PROGRAM_OPTIONS", "REGEX", "CHRONO"];

/// Unit-test discovery and linking settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitTestConfig {
    /// Directory whose immediate subdirectories are unit tests
    pub root: String,

    /// Gitignore-style patterns for subdirectories that are not unit tests
    pub exclude: Vec<String>,

    /// File-name suffix marking a test source
    pub test_suffix: String,

    /// Shared `main` compiled into every test executable
    pub entry_point: String,

    /// Prefix of generated test executable names
    pub name_prefix: String,

    /// Declared external link flags per unit-test directory name
    ///
    /// A unit listed here links only these flags instead of every Boost
    /// library.
    pub link: BTreeMap<String, Vec<String>>,
}

impl Default for UnitTestConfig {
    fn default() -> Self {
        Self {
            root: "tests/unit".to_string(),
            exclude: vec!["test_projects".to_string()],
            test_suffix: "_test.cpp".to_string(),
            entry_point: "tests/unit/gtest_main_run_all.cpp".to_string(),
            name_prefix: "casm_unit_".to_string(),
            link: BTreeMap::new(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Required directory name of the checkout's top level
    pub project_name: String,

    /// Boost library identifiers, rendered as `$(BOOST_<NAME>_LIB)`
    pub boost_libs: Vec<String>,

    /// The one directory whose extensionless files are headers
    pub vendored_header_dir: String,

    /// Base names of version-control files excluded from every list
    pub bookkeeping_files: Vec<String>,

    /// Unit-test settings
    pub unit_tests: UnitTestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: "CASMcode-dev".to_string(),
            boost_libs: DEFAULT_BOOST_LIBS.iter().map(ToString::to_string).collect(),
            vendored_header_dir: "include/casm/external/Eigen".to_string(),
            bookkeeping_files: DEFAULT_BOOKKEEPING_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
            unit_tests: UnitTestConfig::default(),
        }
    }
}

impl Config {
    /// Linker variables for every configured Boost library
    #[must_use]
    pub fn boost_link_flags(&self) -> Vec<String> {
        self.boost_libs
            .iter()
            .map(|lib| format!("$(BOOST_{lib}_LIB)"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.project_name, "CASMcode-dev");
        assert_eq!(config.boost_libs.len(), 5);
        assert_eq!(config.unit_tests.root, "tests/unit");
        assert!(config.unit_tests.link.is_empty());
    }

    #[test]
    fn test_boost_link_flags() {
        let config = Config::default();
        assert_eq!(
            config.boost_link_flags(),
            vec![
                "$(BOOST_SYSTEM_LIB)",
                "$(BOOST_FILESYSTEM_LIB)",
                "$(BOOST_PROGRAM_OPTIONS_LIB)",
                "$(BOOST_REGEX_LIB)",
                "$(BOOST_CHRONO_LIB)",
            ]
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
project_name = "CASMcode"

[unit_tests.link]
App = ["$(BOOST_SYSTEM_LIB)"]
"#,
        )
        .unwrap();

        assert_eq!(config.project_name, "CASMcode");
        assert_eq!(config.unit_tests.test_suffix, "_test.cpp");
        assert_eq!(
            config.unit_tests.link.get("App"),
            Some(&vec!["$(BOOST_SYSTEM_LIB)".to_string()])
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = toml::from_str("projet_name = \"typo\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
