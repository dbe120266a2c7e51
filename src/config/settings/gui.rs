//! GUI-specific settings

use serde::{Deserialize, Serialize};

/// GUI-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width in points
    #[serde(default = "default_width")]
    pub width: f32,

    /// Initial window height in points
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    760.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}
