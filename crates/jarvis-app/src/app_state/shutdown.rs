//! Graceful shutdown: cancel session timers, close windows, stop listeners.

use jarvis_common::Event;

use super::core::ShellApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ShellApp {
    /// Tear down every window and tell bus listeners to stop.
    ///
    /// Order matters:
    /// 1. Destroy windows (each session cancels its pending timers)
    /// 2. Publish `Shutdown` so background listeners exit
    pub fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        let closed = self.windows.destroy_all();
        self.active = None;
        self.should_exit = true;

        self.event_bus.publish(Event::Shutdown);

        tracing::info!(closed, "Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Local;
    use jarvis_config::schema::JarvisConfig;

    use crate::app_state::commands::Command;
    use crate::app_state::core::ShellApp;
    use jarvis_common::Event;

    fn app() -> ShellApp {
        ShellApp::new(JarvisConfig::default(), Local::now())
    }

    #[test]
    fn shutdown_destroys_every_window() {
        let mut app = app();
        app.execute(Command::NewWindow);
        app.execute(Command::Say("pending".into()));
        app.execute(Command::Listen);

        app.shutdown();

        assert!(app.windows.is_empty());
        assert!(app.active_window().is_none());
        assert!(app.should_exit());
        assert!(app.poll(Duration::from_secs(10), Local::now()).is_empty());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown();
        assert!(app.windows.is_empty());
    }

    #[test]
    fn shutdown_publishes_event() {
        let mut app = app();
        let mut rx = app.event_bus().subscribe();
        app.shutdown();
        assert!(matches!(rx.try_recv(), Ok(Event::Shutdown)));
    }
}
