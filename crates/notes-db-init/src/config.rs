//! Bootstrap configuration loading from file and environment variables.
//!
//! With nothing set, the defaults reproduce the fixed behavior: `myapp.db`
//! and `db_connection.txt` in the current directory.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Sidecar file settings.
    #[serde(default)]
    pub sidecar: SidecarConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

/// Connection-info sidecar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SidecarConfig {
    /// Path of the text file describing how to connect.
    #[serde(default = "default_sidecar_path")]
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "notes_db=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(notes_db::DEFAULT_DB_PATH)
}

fn default_sidecar_path() -> PathBuf {
    PathBuf::from(notes_db::DEFAULT_SIDECAR_PATH)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            path: default_sidecar_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from the process environment.
///
/// Variables set to an empty or blank value are treated as unset.
///
/// - `NOTES_DB_CONFIG_PATH` names an optional TOML file
/// - `NOTES_DB_PATH` overrides `database.path`
/// - `NOTES_DB_SIDECAR_PATH` overrides `sidecar.path`
/// - `NOTES_DB_LOG_LEVEL` overrides `logging.level`
/// - `NOTES_DB_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Same as [`load_config`], reading variables through `env`.
pub fn load_config_with(env: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    // Blank values count as unset.
    let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());
    let path = env("NOTES_DB_CONFIG_PATH");

    let mut config = match path.as_deref() {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    if let Some(db_path) = env("NOTES_DB_PATH") {
        config.database.path = PathBuf::from(db_path);
    }
    if let Some(sidecar_path) = env("NOTES_DB_SIDECAR_PATH") {
        config.sidecar.path = PathBuf::from(sidecar_path);
    }
    if let Some(level) = env("NOTES_DB_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env("NOTES_DB_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
