//! External link flags per target
//!
//! Every target links all configured Boost libraries by default. Unit tests
//! may declare their own list in the configuration; a declared list replaces
//! the default for that unit only.

use std::collections::BTreeMap;

use crate::config::Config;

/// External link flags for each generated target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPolicy {
    default_flags: Vec<String>,
    declared: BTreeMap<String, Vec<String>>,
}

impl LinkPolicy {
    /// Build the policy from the configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_flags: config.boost_link_flags(),
            declared: config.unit_tests.link.clone(),
        }
    }

    /// Flags linked into targets without a declared list
    #[must_use]
    pub fn default_flags(&self) -> &[String] {
        &self.default_flags
    }

    /// Flags for the unit test built from the directory named `unit`
    #[must_use]
    pub fn unit_flags(&self, unit: &str) -> &[String] {
        self.declared
            .get(unit)
            .map_or(self.default_flags.as_slice(), Vec::as_slice)
    }
}
