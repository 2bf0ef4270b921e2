//! Configuration management for Skylark.
//!
//! Configuration is read from a TOML file and may be adjusted through
//! environment variables. Missing sections fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Environment variable overriding [`StoreConfig::path`]
pub const ENV_STORE_PATH: &str = "SKYLARK_STORE_PATH";
/// Environment variable overriding [`StoreConfig::backend`]
pub const ENV_STORE_BACKEND: &str = "SKYLARK_STORE_BACKEND";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which roster store backend to open
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// JSON workbook file with one worksheet per tab
    Workbook,
    /// SQLite database with one table per tab
    Sqlite,
}

impl std::str::FromStr for StoreBackend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workbook" | "json" => Ok(StoreBackend::Workbook),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown store backend '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Workbook,
            path: PathBuf::from("skylark_operations.json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "info".to_string(),
        }
    }
}

impl Config {
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Apply `SKYLARK_STORE_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_STORE_PATH) {
            self.store.path = PathBuf::from(path);
        }
        if let Some(backend) = lookup(ENV_STORE_BACKEND) {
            self.store.backend = backend.parse()?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.store.backend, StoreBackend::Workbook);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            [store]
            backend = "sqlite"
            path = "/var/lib/skylark/roster.db"

            [logging]
            format = "json"
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.path, PathBuf::from("/var/lib/skylark/roster.db"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default_config());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("skylark_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[store]\nbackend = \"workbook\"\npath = \"roster.json\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.store.path, PathBuf::from("roster.json"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_backend_rejected() {
        let result = Config::from_toml_str("[store]\nbackend = \"gsheets\"\npath = \"x\"\n");
        assert!(matches!(result, Err(CoreError::ConfigParse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_STORE_PATH, "/tmp/ops.db"),
            (ENV_STORE_BACKEND, "SQLite"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default_config();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.path, PathBuf::from("/tmp/ops.db"));
    }

    #[test]
    fn test_env_override_unknown_backend() {
        let mut config = Config::default_config();
        let result = config.apply_overrides(|key| {
            (key == ENV_STORE_BACKEND).then(|| "excel".to_string())
        });
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }
}
