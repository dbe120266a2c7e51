use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::EntityId;

/// Lifecycle status of a task.
///
/// `Completed` is only ever observed; the client never causes it.
/// Statuses the client has no lifecycle controls for (e.g. `failed`) are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Active,
    Paused,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Active => "active",
            TaskStatus::Paused => "paused",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(raw) => raw,
        }
    }

    /// The control action offered for this status, if any
    pub fn available_action(&self) -> Option<TaskAction> {
        match self {
            TaskStatus::Active => Some(TaskAction::Pause),
            TaskStatus::Paused => Some(TaskAction::Resume),
            TaskStatus::Completed | TaskStatus::Other(_) => None,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => TaskStatus::Active,
            "paused" => TaskStatus::Paused,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TaskStatus::from)
    }
}

/// Single-task control action sent to `/api/tasks/{id}/control`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAction {
    Pause,
    Resume,
}

impl TaskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::Pause => "pause",
            TaskAction::Resume => "resume",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskAction::Pause => "Pause",
            TaskAction::Resume => "Resume",
        }
    }
}

impl std::fmt::Display for TaskAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pause" => Ok(TaskAction::Pause),
            "resume" => Ok(TaskAction::Resume),
            other => Err(format!("unknown task action '{other}' (expected pause or resume)")),
        }
    }
}

/// A task as listed by `GET /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub intent: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
