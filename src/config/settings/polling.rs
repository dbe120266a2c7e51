//! Poll cadence for the three resource lists

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Anything faster would hammer the backend for no visible gain
const MIN_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingSettings {
    #[serde(default = "default_tasks_ms")]
    pub tasks_ms: u64,

    #[serde(default = "default_memories_ms")]
    pub memories_ms: u64,

    #[serde(default = "default_projects_ms")]
    pub projects_ms: u64,
}

fn default_tasks_ms() -> u64 {
    2000
}

fn default_memories_ms() -> u64 {
    5000
}

fn default_projects_ms() -> u64 {
    5000
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            tasks_ms: default_tasks_ms(),
            memories_ms: default_memories_ms(),
            projects_ms: default_projects_ms(),
        }
    }
}

impl PollingSettings {
    pub fn tasks(&self) -> Duration {
        clamp(self.tasks_ms)
    }

    pub fn memories(&self) -> Duration {
        clamp(self.memories_ms)
    }

    pub fn projects(&self) -> Duration {
        clamp(self.projects_ms)
    }
}

fn clamp(ms: u64) -> Duration {
    Duration::from_millis(ms.max(MIN_INTERVAL_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_are_clamped() {
        let settings = PollingSettings {
            tasks_ms: 0,
            memories_ms: 5000,
            projects_ms: 99,
        };
        assert_eq!(settings.tasks(), Duration::from_millis(100));
        assert_eq!(settings.memories(), Duration::from_secs(5));
        assert_eq!(settings.projects(), Duration::from_millis(100));
    }
}
