//! Configuration loading and management

mod io;
mod settings;

pub use settings::{GuiSettings, PollingSettings, ServerSettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection
    #[serde(default)]
    pub server: ServerSettings,

    /// Poll cadence per resource list
    #[serde(default)]
    pub polling: PollingSettings,

    /// Window settings
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
