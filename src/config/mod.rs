#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};

/// Tables every airport database carries. Only the first three are read or
/// written; the rest just have to exist.
pub const REQUIRED_TABLES: [&str; 7] = [
    "continent",
    "country",
    "region",
    "airport",
    "airport_frequency",
    "runway",
    "navigation_aid",
];

pub fn default_required_tables() -> Vec<String> {
    REQUIRED_TABLES.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub foreign_keys: bool,
    pub required_tables: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            foreign_keys: true,
            required_tables: default_required_tables(),
        }
    }
}

impl ConfigProvider for EngineConfig {
    fn foreign_keys(&self) -> bool {
        self.foreign_keys
    }

    fn required_tables(&self) -> &[String] {
        &self.required_tables
    }
}
