//! JSON5 config loading and validation.

use crate::{ConfigError, MnemoConfig};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Default config filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mnemo.json5";

impl MnemoConfig {
    /// Load a config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: serde_json::Value = json5::from_str(contents)?;
        let config: MnemoConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `mnemo.json5` from the given directory if present, otherwise
    /// fall back to defaults.
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            debug!("no config file found (path={}); using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "memory.path must be non-empty".to_string(),
            ));
        }
        if self.memory.recall_k < 1 {
            return Err(ConfigError::Invalid(
                "memory.recall_k must be at least 1".to_string(),
            ));
        }
        if !(-1.0..=1.0).contains(&self.memory.similarity_threshold) {
            return Err(ConfigError::Invalid(format!(
                "memory.similarity_threshold must be in [-1, 1], got {}",
                self.memory.similarity_threshold
            )));
        }
        if self.embedding.dimension < 1 {
            return Err(ConfigError::Invalid(
                "embedding.dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
