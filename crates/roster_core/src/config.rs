//! Application configuration loading.
//!
//! # Responsibility
//! - Load and validate the TOML configuration consumed at startup.
//! - Keep required settings explicit: a missing or blank value is an error,
//!   not a silent default.
//!
//! # Invariants
//! - `store.path` is required and non-blank; the embedded store needs no
//!   credentials beyond its file path.
//! - Config errors are reported before any repository call; the controller
//!   treats them as fatal startup failures.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Top-level startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the catalog store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file. Created on first run.
    pub path: String,
}

/// Optional logging settings; file logging stays off without a directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level override; build-mode default applies when unset.
    #[serde(default)]
    pub level: Option<String>,
    /// Directory for rotating log files.
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    MissingValue(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config file `{path}`: {source}")
            }
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::MissingValue(key) => write!(f, "config value `{key}` is missing or blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::MissingValue(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl Config {
    /// Reads and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::MissingValue("store.path"));
        }
        if let Some(level) = &self.logging.level {
            if level.trim().is_empty() {
                return Err(ConfigError::MissingValue("logging.level"));
            }
        }
        if let Some(dir) = &self.logging.dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::MissingValue("logging.dir"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};

    #[test]
    fn loads_minimal_config() {
        let config = Config::from_toml_str("[store]\npath = \"roster.db\"\n").unwrap();
        assert_eq!(config.store.path, "roster.db");
        assert!(config.logging.level.is_none());
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn loads_full_config() {
        let config = Config::from_toml_str(
            "[store]\npath = \"/data/roster.db\"\n\n[logging]\nlevel = \"debug\"\ndir = \"/var/log/roster\"\n",
        )
        .unwrap();
        assert_eq!(config.store.path, "/data/roster.db");
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.dir.as_deref(), Some("/var/log/roster"));
    }

    #[test]
    fn blank_store_path_is_rejected() {
        let err = Config::from_toml_str("[store]\npath = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue("store.path")));
    }

    #[test]
    fn missing_store_section_is_a_parse_error() {
        let err = Config::from_toml_str("[logging]\nlevel = \"info\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "[store]\npath = \"catalog.db\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.store.path, "catalog.db");
    }
}
