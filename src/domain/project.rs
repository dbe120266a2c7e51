use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::EntityId;

/// Project status as reported by the backend.
///
/// Only `active` carries meaning on the client; any other value is a
/// non-active project whose raw text is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Inactive(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Inactive(raw) => raw,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Active)
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        if raw == "active" {
            ProjectStatus::Active
        } else {
            ProjectStatus::Inactive(raw)
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ProjectStatus::from)
    }
}

/// A project as listed by `GET /api/projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub status: ProjectStatus,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
