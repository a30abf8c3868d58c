//! Schema Registry configuration

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level service configuration, loadable from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conf {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Conf {
    /// Load configuration from a JSON file
    pub fn load_json(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let data = std::fs::read(path.as_ref())?;
        serde_json::from_slice(&data)
            .map_err(|e| SchemaError::Internal(format!("invalid configuration: {e}")))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Configuration for the Schema Registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Storage backend configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl RegistryConfig {
    /// Create config with in-memory storage
    pub fn memory() -> Self {
        Self {
            storage: StorageConfig::Memory,
        }
    }

    /// Create config with file-backed storage in the given directory
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::File { dir: dir.into() },
        }
    }
}

/// Storage backend configuration
///
/// The registry supports two interchangeable backends:
/// - **Memory**: in-memory storage, lost on restart (default for development)
/// - **File**: one file per schema ID inside a base directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// In-memory storage (default)
    #[default]
    Memory,

    /// Directory-backed file storage
    File {
        /// Base directory for schema files, created at startup if absent
        dir: PathBuf,
    },
}
