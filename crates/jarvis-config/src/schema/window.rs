//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings for each window the host opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Background color shown before the first frame.
    pub background: String,
    /// Hide native decorations and draw a custom title bar.
    pub frameless: bool,
    /// Start maximized instead of windowed.
    pub start_maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Jarvis AI Assistant".into(),
            width: 1200,
            height: 800,
            min_width: 800,
            min_height: 600,
            background: "#121212".into(),
            frameless: true,
            start_maximized: false,
        }
    }
}
