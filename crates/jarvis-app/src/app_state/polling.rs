//! Timer driving: advance every session and the telemetry source to the
//! current host time, then turn what changed into events and output.

use std::time::Duration;

use chrono::{DateTime, Local};
use jarvis_assistant::SessionEvent;
use jarvis_common::Event;
use jarvis_platform::TelemetrySource;
use tokio::sync::broadcast;

use super::core::ShellApp;
use super::render;

impl ShellApp {
    /// Fire every timer due by `elapsed` host time. Returns lines to print
    /// for the active window.
    pub fn poll(&mut self, elapsed: Duration, now: DateTime<Local>) -> Vec<String> {
        self.elapsed = self.elapsed.max(elapsed);
        let mut output = Vec::new();

        for id in self.windows.ids() {
            let Some(window) = self.windows.get_mut(id) else {
                continue;
            };
            window.advance_to(self.elapsed);
            let is_active = self.active == Some(id);
            let conversation = &mut window.conversation;

            for event in conversation.drain_events() {
                match event {
                    SessionEvent::MessageAppended { id: message_id, sender } => {
                        self.event_bus.publish(Event::MessageAppended {
                            window: id,
                            message_id: message_id.0,
                            sender: sender.as_str().to_string(),
                        });
                        if is_active {
                            if let Some(message) = conversation.state().message(message_id) {
                                output.push(render::message_line(
                                    &self.config.conversation,
                                    message,
                                ));
                            }
                        }
                    }
                    SessionEvent::ModeChanged { mode } => {
                        self.event_bus.publish(Event::InputModeChanged {
                            window: id,
                            mode: mode.name().to_string(),
                        });
                        if is_active {
                            let range = conversation.config().level_range.clone();
                            output.push(render::mode_line(&mode, range));
                        }
                    }
                    SessionEvent::LevelsUpdated => {}
                }
            }
        }

        if self.telemetry.tick(self.elapsed, now) {
            self.event_bus.publish(Event::TelemetryUpdated);
        }

        output
    }

    /// No window has a pending reply or an active capture.
    pub fn is_settled(&self) -> bool {
        self.windows
            .iter()
            .all(|(_, window)| window.conversation.next_deadline().is_none())
    }
}

/// Log bus traffic until the host shuts down.
pub async fn log_events(mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(Event::Shutdown) => break,
            Ok(Event::TelemetryUpdated) => tracing::trace!("telemetry updated"),
            Ok(event) => tracing::debug!(?event, "bus event"),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event logger lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::commands::Command;
    use jarvis_config::schema::JarvisConfig;

    fn app() -> ShellApp {
        let mut config = JarvisConfig::default();
        config.voice.seed = Some(5);
        ShellApp::new(config, Local::now())
    }

    #[test]
    fn reply_is_printed_after_delay() {
        let mut app = app();
        app.execute(Command::Say("Hello".into()));

        let lines = app.poll(Duration::ZERO, Local::now());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("You: Hello"));

        assert!(app.poll(Duration::from_millis(999), Local::now()).is_empty());

        let lines = app.poll(Duration::from_millis(1000), Local::now());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Jarvis: I'm processing your request: \"Hello\""));
    }

    #[test]
    fn capture_timeout_prints_staged_phrase() {
        let mut app = app();
        app.execute(Command::Listen);
        let lines = app.poll(Duration::from_millis(50), Local::now());
        assert_eq!(lines, vec!["-- listening --".to_string()]);

        let lines = app.poll(Duration::from_millis(3000), Local::now());
        assert_eq!(
            lines,
            vec!["-- idle -- draft: What is the weather like today? (/send to submit)".to_string()]
        );
    }

    #[test]
    fn same_tick_messages_print_in_order() {
        let mut app = app();
        app.execute(Command::Say("one".into()));
        app.execute(Command::Say("two".into()));

        let lines = app.poll(Duration::ZERO, Local::now());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("You: one"));
        assert!(lines[1].ends_with("You: two"));

        let lines = app.poll(Duration::from_millis(1000), Local::now());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Jarvis: I'm processing your request: \"one\""));
        assert!(lines[1].ends_with("Jarvis: I'm processing your request: \"two\""));
    }

    #[test]
    fn same_tick_mode_changes_print_each_mode() {
        let mut app = app();
        app.execute(Command::Listen);
        app.execute(Command::Stop);

        let lines = app.poll(Duration::ZERO, Local::now());
        assert_eq!(
            lines,
            vec!["-- listening --".to_string(), "-- idle --".to_string()]
        );
    }

    #[test]
    fn session_events_reach_the_bus() {
        let mut app = app();
        let mut rx = app.event_bus().subscribe();
        app.execute(Command::Say("hi".into()));
        app.poll(Duration::ZERO, Local::now());

        match rx.try_recv() {
            Ok(Event::MessageAppended {
                message_id, sender, ..
            }) => {
                assert_eq!(message_id, 2);
                assert_eq!(sender, "user");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn background_windows_advance_silently() {
        let mut app = app();
        app.execute(Command::Say("first".into()));
        app.poll(Duration::ZERO, Local::now());
        app.execute(Command::NewWindow);

        let lines = app.poll(Duration::from_secs(2), Local::now());
        assert!(lines.is_empty());

        let first = app.windows.first().unwrap();
        let window = app.windows.get(first).unwrap();
        assert_eq!(window.conversation.timeline().len(), 3);
    }

    #[test]
    fn settles_once_timers_drain() {
        let mut app = app();
        assert!(app.is_settled());

        app.execute(Command::Say("wait for me".into()));
        assert!(!app.is_settled());

        app.poll(Duration::from_secs(1), Local::now());
        assert!(app.is_settled());
    }

    #[test]
    fn telemetry_tick_publishes() {
        let mut app = app();
        let mut rx = app.event_bus().subscribe();
        app.poll(Duration::from_secs(1), Local::now());
        assert!(matches!(rx.try_recv(), Ok(Event::TelemetryUpdated)));
    }

    #[tokio::test]
    async fn event_logger_stops_on_shutdown() {
        let app = app();
        let handle = tokio::spawn(log_events(app.event_bus().subscribe()));
        app.event_bus().publish(Event::TelemetryUpdated);
        app.event_bus().publish(Event::Shutdown);
        handle.await.unwrap();
    }
}
