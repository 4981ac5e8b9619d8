use crate::config::{default_required_tables, EngineConfig};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Opened at startup when set.
    pub path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub foreign_keys: bool,
    #[serde(default = "default_required_tables")]
    pub required_tables: Vec<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            foreign_keys: true,
            required_tables: default_required_tables(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn default_true() -> bool {
    true
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn foreign_keys(&self) -> bool {
        self.database.foreign_keys
    }

    fn required_tables(&self) -> &[String] {
        &self.database.required_tables
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.database.path {
            validation::validate_path("database.path", &path.to_string_lossy())?;
        }

        validation::validate_table_names("database.required_tables", &self.database.required_tables)?;

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(AppError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.database.path.is_none());
        assert!(config.foreign_keys());
        assert_eq!(config.required_tables().len(), 7);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
        assert_eq!(config.required_tables(), EngineConfig::default().required_tables());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[database]
path = "data/airport.db"
foreign_keys = false
required_tables = ["continent", "country", "region"]

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.database.path,
            Some(PathBuf::from("data/airport.db"))
        );
        assert!(!config.foreign_keys());
        assert_eq!(config.required_tables(), ["continent", "country", "region"]);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AIRPORT_ENGINE_TEST_DB", "/tmp/airport.db");

        let config = TomlConfig::from_toml_str(
            r#"
[database]
path = "${AIRPORT_ENGINE_TEST_DB}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.database.path,
            Some(PathBuf::from("/tmp/airport.db"))
        );

        std::env::remove_var("AIRPORT_ENGINE_TEST_DB");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[database]
required_tables = ["continent", "bad name"]
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[database\npath = 1").unwrap_err();
        assert!(matches!(err, AppError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[database]\npath = \"airport.db\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.database.path, Some(PathBuf::from("airport.db")));
    }
}
