//! ShellApp struct definition and constructor.

use std::time::Duration;

use chrono::{DateTime, Local};
use jarvis_common::{Event, EventBus, WindowId};
use jarvis_config::schema::JarvisConfig;
use jarvis_platform::SimulatedTelemetry;

use super::windows::{ShellWindow, WindowRegistry};

/// Top-level host state.
pub struct ShellApp {
    pub(super) config: JarvisConfig,
    pub(super) event_bus: EventBus,
    pub(super) windows: WindowRegistry,
    pub(super) telemetry: SimulatedTelemetry,

    // Window the REPL renders and sends commands to
    pub(super) active: Option<WindowId>,

    // Host time of the last poll
    pub(super) elapsed: Duration,

    pub(super) should_exit: bool,
}

impl ShellApp {
    /// Create the host and open its first window.
    pub fn new(config: JarvisConfig, now: DateTime<Local>) -> Self {
        let telemetry = SimulatedTelemetry::new(config.telemetry.clone(), config.voice.seed, now);
        let mut app = Self {
            windows: WindowRegistry::new(&config),
            event_bus: EventBus::new(256),
            telemetry,
            config,
            active: None,
            elapsed: Duration::ZERO,
            should_exit: false,
        };
        app.open_window();
        app
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    /// Open a new window at the current host time and make it active.
    pub(super) fn open_window(&mut self) -> WindowId {
        let id = self.windows.create(self.elapsed);
        self.active = Some(id);
        self.event_bus.publish(Event::WindowOpened(id));
        id
    }

    /// Destroy a window. When the last one goes the host exits.
    pub(super) fn close_window(&mut self, id: WindowId) -> bool {
        if self.windows.destroy(id).is_none() {
            return false;
        }
        self.event_bus.publish(Event::WindowClosed(id));
        if self.active == Some(id) {
            self.active = self.windows.first();
        }
        if self.windows.is_empty() {
            tracing::info!("last window closed");
            self.should_exit = true;
        }
        true
    }

    pub(super) fn active_mut(&mut self) -> Option<(WindowId, &mut ShellWindow)> {
        let id = self.active?;
        self.windows.get_mut(id).map(|window| (id, window))
    }

    pub(super) fn active_ref(&self) -> Option<(WindowId, &ShellWindow)> {
        let id = self.active?;
        self.windows.get(id).map(|window| (id, window))
    }
}
