//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.echodeck/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".echodeck")
    }

    /// Get the global config file path (~/.echodeck/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The exclusive lock keeps a CLI invocation and a running GUI from
    /// interleaving writes; the temp file + rename keeps a crash from leaving
    /// a truncated config behind.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }

    /// Load global configuration from ~/.echodeck/config.toml.
    /// If no config exists, one is written with defaults first.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::global_config_path())
    }

    /// Load `path`, writing a default config there if it is missing
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::default().save_to_file(path)?;
            tracing::info!("Created {}", path.display());
        }
        Self::from_file(path)
    }

    /// Resolve the effective config for a run.
    ///
    /// An explicit path must parse; the global config falls back to defaults
    /// with a warning so a broken file never keeps the dashboard from starting.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_override {
            return Self::from_file(path);
        }

        match Self::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Failed to load config: {:#}. Falling back to defaults.", e);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.polling.tasks_ms, 2000);

        let reread = Config::from_file(&path).unwrap();
        assert_eq!(reread.server.base_url, config.server.base_url);
    }

    #[test]
    fn test_save_roundtrip_keeps_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.server.base_url = "http://10.0.0.5:8000".to_string();
        config.polling.memories_ms = 12_000;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.server.base_url, "http://10.0.0.5:8000");
        assert_eq!(loaded.polling.memories_ms, 12_000);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_explicit_broken_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbase_url=").unwrap();

        assert!(Config::resolve(Some(&path)).is_err());
    }
}
