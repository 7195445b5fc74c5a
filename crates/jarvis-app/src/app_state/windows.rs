//! Window registry: one chrome + one conversation session per window.

use std::collections::BTreeMap;
use std::time::Duration;

use jarvis_assistant::{Conversation, SessionConfig, TemplateResponder};
use jarvis_common::WindowId;
use jarvis_config::schema::{JarvisConfig, WindowConfig};
use jarvis_platform::{HeadlessChrome, WindowChrome};
use tracing::{debug, info};

/// Build per-session settings from the loaded config.
pub fn session_config(config: &JarvisConfig) -> SessionConfig {
    let conversation = &config.conversation;
    let voice = &config.voice;
    let level = |value: u32| u8::try_from(value).unwrap_or(u8::MAX);

    let mut session = SessionConfig::default()
        .with_greeting(conversation.greeting.clone())
        .with_reply_delay(Duration::from_millis(u64::from(conversation.reply_delay_ms)))
        .with_sample_interval(Duration::from_millis(u64::from(voice.sample_interval_ms)))
        .with_capture_duration(Duration::from_millis(u64::from(voice.capture_duration_ms)))
        .with_bars(
            voice.bar_count as usize,
            level(voice.min_level)..level(voice.max_level),
        )
        .with_recognized_phrase(voice.recognized_phrase.clone());
    if let Some(seed) = voice.seed {
        session = session.with_seed(seed);
    }
    session
}

/// A window the host has open.
pub struct ShellWindow {
    pub chrome: HeadlessChrome,
    pub conversation: Conversation,
    /// Host time at which the window was opened. The session's clock
    /// counts from here.
    opened_at: Duration,
}

impl ShellWindow {
    /// Advance the session to host time `elapsed`. Returns timers fired.
    pub fn advance_to(&mut self, elapsed: Duration) -> usize {
        self.conversation
            .advance_to(elapsed.saturating_sub(self.opened_at))
    }
}

/// Maps window ids to open windows. Ids are never reused.
pub struct WindowRegistry {
    window_config: WindowConfig,
    session_config: SessionConfig,
    reply_template: String,
    next_id: u32,
    windows: BTreeMap<WindowId, ShellWindow>,
}

impl WindowRegistry {
    pub fn new(config: &JarvisConfig) -> Self {
        Self {
            window_config: config.window.clone(),
            session_config: session_config(config),
            reply_template: config.conversation.reply_template.clone(),
            next_id: 1,
            windows: BTreeMap::new(),
        }
    }

    /// Open a window with a fresh conversation session.
    pub fn create(&mut self, opened_at: Duration) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        let conversation = Conversation::new(self.session_config.clone())
            .with_responder(TemplateResponder::new(self.reply_template.clone()));
        let chrome = HeadlessChrome::new(id, &self.window_config);
        info!(window = %id, session = %conversation.id(), "window opened");

        self.windows.insert(
            id,
            ShellWindow {
                chrome,
                conversation,
                opened_at,
            },
        );
        id
    }

    pub fn get(&self, id: WindowId) -> Option<&ShellWindow> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut ShellWindow> {
        self.windows.get_mut(&id)
    }

    /// Close the window's chrome, shut its session down and forget it.
    /// Returns the torn-down window.
    pub fn destroy(&mut self, id: WindowId) -> Option<ShellWindow> {
        let mut window = self.windows.remove(&id)?;
        window.chrome.close();
        let cancelled = window.conversation.shutdown();
        debug!(window = %id, cancelled, "window destroyed");
        Some(window)
    }

    /// Destroy every window. Used during shutdown.
    pub fn destroy_all(&mut self) -> usize {
        let ids = self.ids();
        ids.into_iter()
            .filter(|id| self.destroy(*id).is_some())
            .count()
    }

    /// Open window ids, oldest first.
    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &ShellWindow)> {
        self.windows.iter().map(|(id, window)| (*id, window))
    }

    pub fn first(&self) -> Option<WindowId> {
        self.windows.keys().next().copied()
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
