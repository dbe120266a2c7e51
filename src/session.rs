//! Stable chat session identifier, generated once per user and reused.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;

/// Identifier sent with every chat message so the backend keeps one history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Default location: ~/.echodeck/session_id
    pub fn default_path() -> PathBuf {
        Config::global_config_dir().join("session_id")
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the persisted id, or generate and persist a new one.
    ///
    /// A failed write still yields a usable id for this run.
    pub fn load_or_create(path: &Path) -> Self {
        if let Some(existing) = read_existing(path) {
            return existing;
        }

        let id = Self::generate();
        if let Err(e) = persist(path, &id) {
            tracing::warn!("Session id not persisted: {:#}", e);
        }
        id
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn read_existing(path: &Path) -> Option<SessionId> {
    let raw = std::fs::read_to_string(path).ok()?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| SessionId(trimmed.to_string()))
}

fn persist(path: &Path, id: &SessionId) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, id.as_str())
        .with_context(|| format!("Failed to write {}", path.display()))
}
