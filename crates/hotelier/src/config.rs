//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `hotelier.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where collections are persisted.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Invalidation bus settings.
    pub events: EventsConfig,
}

/// Which key-value backend holds the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per collection under [`StorageConfig::dir`].
    File,
    /// Process memory; everything is lost on exit.
    Memory,
}

/// Persistence configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory of the file backend.
    pub dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Invalidation bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Notices buffered per subscriber before the oldest are dropped.
    pub capacity: usize,
}

impl Config {
    /// Load configuration from `hotelier.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("hotelier.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file, falling back to defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up by environment variable name.
    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("HOTELIER_STORAGE_DIR") {
            self.storage.dir = PathBuf::from(val);
        }
        if let Some(val) = var("HOTELIER_STORAGE_BACKEND") {
            self.storage.backend = match val.as_str() {
                "file" => StorageBackend::File,
                "memory" => StorageBackend::Memory,
                other => {
                    return Err(ConfigError::Validation(format!(
                        "unknown storage backend `{other}` in HOTELIER_STORAGE_BACKEND"
                    )));
                }
            };
        }
        if let Some(val) = var("HOTELIER_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    /// Check semantic constraints the TOML types cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.events.capacity == 0 {
            return Err(ConfigError::Validation(
                "events capacity must be non-zero".to_string(),
            ));
        }
        if self.storage.backend == StorageBackend::File && self.storage.dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "storage dir must be set for the file backend".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            dir: PathBuf::from("hotelier-data"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hotelier=info,hotelier_app=info,hotelier_adapter_storage_kv=warn".to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.dir, PathBuf::from("hotelier-data"));
        assert_eq!(config.events.capacity, 64);
        assert!(config.logging.filter.starts_with("hotelier=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.events.capacity, 64);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [storage]
            backend = 'memory'
            dir = '/var/lib/hotelier'

            [logging]
            filter = 'debug'

            [events]
            capacity = 8
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.dir, PathBuf::from("/var/lib/hotelier"));
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.events.capacity, 8);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [storage]
            dir = 'data'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("data"));
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.events.capacity, 64);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn should_read_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hotelier.toml");
        std::fs::write(&path, "[events]\ncapacity = 4\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.events.capacity, 4);
    }

    #[test]
    fn should_reject_unknown_backend() {
        let result: Result<Config, _> = toml::from_str("[storage]\nbackend = 'sqlite'\n");
        assert!(result.is_err());
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn should_apply_environment_overrides() {
        let mut config = Config::default();

        config
            .apply_overrides(vars(&[
                ("HOTELIER_STORAGE_DIR", "/tmp/hotel"),
                ("HOTELIER_STORAGE_BACKEND", "memory"),
                ("HOTELIER_LOG", "hotelier=debug"),
            ]))
            .unwrap();

        assert_eq!(config.storage.dir, PathBuf::from("/tmp/hotel"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.filter, "hotelier=debug");
    }

    #[test]
    fn should_prefer_rust_log_over_hotelier_log() {
        let mut config = Config::default();

        config
            .apply_overrides(vars(&[("HOTELIER_LOG", "info"), ("RUST_LOG", "trace")]))
            .unwrap();

        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_unknown_backend_override() {
        let mut config = Config::default();

        let result = config.apply_overrides(vars(&[("HOTELIER_STORAGE_BACKEND", "sqlite")]));

        assert!(matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("sqlite")));
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn should_reject_zero_capacity() {
        let mut config = Config::default();
        config.events.capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_dir_for_file_backend() {
        let mut config = Config::default();
        config.storage.dir = PathBuf::new();
        assert!(config.validate().is_err());

        config.storage.backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
