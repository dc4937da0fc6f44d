//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 8080, "cors_origin": "http://localhost:3000" },
//!   "storage": { "backend": "sqlite", "database_url": "sqlite://employees.db", "max_connections": 5 },
//!   "log_format": "compact"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

/// Which storage collaborator to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite database at `database_url`
    #[default]
    Sqlite,
    /// Process-local map, lost on exit
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// SQLite connection URL (default: "sqlite://employees.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Connection pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://employees.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file, or use defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.http.cors_origin_header().is_none() {
            return Err(CliError::config_error(format!(
                "Invalid http.cors_origin: '{}'",
                self.http.cors_origin
            )));
        }

        if self.storage.max_connections == 0 {
            return Err(CliError::config_error("storage.max_connections must be > 0"));
        }

        Ok(())
    }

    /// Write this configuration as pretty JSON
    pub fn write(&self, path: &Path) -> CliResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::config_error(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, json + "\n")?;
        Ok(())
    }
}
