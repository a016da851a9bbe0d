// src/config.rs - desktop shell settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Window placement for the desktop shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Share Card".to_string(),
            width: 1000.0,
            height: 680.0,
        }
    }
}

/// Launcher settings. Every key is optional on disk; missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub window: WindowConfig,
    /// `EnvFilter` directive string for [`crate::logging::init`].
    pub log_filter: String,
    /// JSON product payload to render instead of the built-in sample.
    pub product_path: Option<PathBuf>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_filter: "info".to_string(),
            product_path: None,
        }
    }
}

impl CardConfig {
    /// Loads settings from a TOML file. A missing file is not an error;
    /// an unreadable or unparsable one is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&raw).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }
}
