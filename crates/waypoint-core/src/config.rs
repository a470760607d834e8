//! Application configuration.
//!
//! Configuration is a JSON object; every field is optional:
//!
//! ```json
//! {
//!   "storage": "sqlite",
//!   "database_path": "/var/lib/waypoint/waypoint.db",
//!   "bind": "0.0.0.0",
//!   "port": 8080
//! }
//! ```
//!
//! The default location is `$XDG_CONFIG_HOME/waypoint/config.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypointError};

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Persistence backend selected in the configuration file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageBackend,
    pub database_path: Option<PathBuf>,
    pub bind: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            database_path: None,
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| WaypointError::Configuration {
            message: format!("Invalid configuration: {e}"),
        })
    }

    /// Reads the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| WaypointError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_json(&text)
    }

    /// Reads `path` when given; otherwise the default location if a file
    /// exists there, falling back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match xdg::BaseDirectories::with_prefix("waypoint").find_config_file("config.json") {
            Some(found) => Self::load(&found),
            None => Ok(Self::default()),
        }
    }

    /// Socket address string for the HTTP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
