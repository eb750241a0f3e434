//! Configuration for graph stores and their hosts
//!
//! Configuration only affects pre-allocation and logging verbosity; graph
//! semantics are the same under every configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of nodes to pre-allocate room for
    pub initial_capacity: usize,
    /// Logging level: trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            log_level: "info".to_string(),
        }
    }
}

impl GraphConfig {
    /// Parse configuration from a YAML document
    ///
    /// Missing keys fall back to their defaults. The log level is validated
    /// eagerly so a bad value is reported at load time.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: GraphConfig = serde_yaml::from_str(yaml)?;
        config.level()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn level(&self) -> ConfigResult<tracing::Level> {
        tracing::Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
