//! TOML configuration for the predictor.
//!
//! Every key has a default, so an empty file (or no file at all) yields a
//! working configuration pointing at `models/marsh_gbdt.json`.

use crate::errors::{MarshError, Result};
use crate::session::DEFAULT_PREDICT_DELAY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/marsh.toml";

/// Default location of the classifier artifact
pub const DEFAULT_MODEL_PATH: &str = "models/marsh_gbdt.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MarshConfig {
    pub model: ModelConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
}

/// Classifier artifact location and pinning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// BLAKE3 hash of the canonical model JSON
    pub expected_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub predict_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Bold table headers
    pub styled: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            expected_hash: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            predict_delay_ms: DEFAULT_PREDICT_DELAY.as_millis() as u64,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { styled: true }
    }
}

impl SessionConfig {
    pub fn predict_delay(&self) -> Duration {
        Duration::from_millis(self.predict_delay_ms)
    }
}

impl MarshConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| MarshError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file that must exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MarshError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "No configuration file; using defaults");
            Ok(Self::default())
        }
    }
}
