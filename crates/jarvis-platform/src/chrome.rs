//! Window-chrome bridge: minimize / maximize / close commands.
//!
//! The presentation layer sends fire-and-forget chrome commands through a
//! [`WindowChrome`]. The headless implementation tracks the resulting state
//! so the terminal host and tests can observe it.

use std::fmt;

use jarvis_common::WindowId;
use jarvis_config::schema::WindowConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
    Closed,
}

impl WindowState {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowState::Normal => "normal",
            WindowState::Minimized => "minimized",
            WindowState::Maximized => "maximized",
            WindowState::Closed => "closed",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window-manager commands available to the presentation layer.
///
/// Commands on a closed window are ignored.
pub trait WindowChrome: Send {
    fn minimize(&mut self);
    /// Maximize, or restore if already maximized.
    fn maximize(&mut self);
    fn close(&mut self);
    fn state(&self) -> WindowState;
}

/// Chrome for a window with no native surface.
#[derive(Debug, Clone)]
pub struct HeadlessChrome {
    id: WindowId,
    title: String,
    size: (u32, u32),
    state: WindowState,
}

impl HeadlessChrome {
    pub fn new(id: WindowId, config: &WindowConfig) -> Self {
        let state = if config.start_maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        };
        debug!(
            window = %id,
            title = %config.title,
            width = config.width,
            height = config.height,
            frameless = config.frameless,
            "headless window created"
        );
        Self {
            id,
            title: config.title.clone(),
            size: (
                config.width.max(config.min_width),
                config.height.max(config.min_height),
            ),
            state,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    fn transition(&mut self, next: WindowState) {
        if self.state == WindowState::Closed {
            debug!(window = %self.id, "chrome command on closed window ignored");
            return;
        }
        if self.state != next {
            info!(window = %self.id, from = %self.state, to = %next, "window state changed");
            self.state = next;
        }
    }
}

impl WindowChrome for HeadlessChrome {
    fn minimize(&mut self) {
        self.transition(WindowState::Minimized);
    }

    fn maximize(&mut self) {
        let next = if self.state == WindowState::Maximized {
            WindowState::Normal
        } else {
            WindowState::Maximized
        };
        self.transition(next);
    }

    fn close(&mut self) {
        self.transition(WindowState::Closed);
    }

    fn state(&self) -> WindowState {
        self.state
    }
}
