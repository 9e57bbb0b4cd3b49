//! Registry configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::DEFAULT_CAPACITY;
use crate::errors::ConfigError;

/// Configuration for a [`crate::Registry`].
///
/// Capacity is signed so a non-positive value from user input or a config
/// file can be carried and corrected in one place instead of rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Total number of spots. Non-positive values fall back to the default.
    pub capacity: i64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY as i64,
        }
    }
}

impl RegistryConfig {
    pub fn new(capacity: i64) -> Self {
        Self { capacity }
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// The capacity the registry will actually use. A non-positive
    /// configured value falls back to [`DEFAULT_CAPACITY`].
    pub fn effective_capacity(&self) -> usize {
        if self.capacity > 0 {
            self.capacity as usize
        } else {
            warn!(
                configured = self.capacity,
                fallback = DEFAULT_CAPACITY,
                "non-positive capacity configured, using default"
            );
            DEFAULT_CAPACITY
        }
    }
}
