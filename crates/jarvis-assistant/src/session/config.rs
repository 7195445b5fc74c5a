//! Per-session settings.

use std::ops::Range;
use std::time::Duration;

/// Timing and canned content for one conversation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub greeting: String,
    pub reply_delay: Duration,
    pub sample_interval: Duration,
    pub capture_duration: Duration,
    pub bar_count: usize,
    pub level_range: Range<u8>,
    pub recognized_phrase: String,
    /// Level meter seed. Random when `None`.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello! I am Jarvis, your AI assistant. How can I help you today?".into(),
            reply_delay: Duration::from_millis(1000),
            sample_interval: Duration::from_millis(100),
            capture_duration: Duration::from_millis(3000),
            bar_count: 15,
            level_range: 5..35,
            recognized_phrase: "What is the weather like today?".into(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    pub fn with_capture_duration(mut self, duration: Duration) -> Self {
        self.capture_duration = duration;
        self
    }

    pub fn with_bars(mut self, bar_count: usize, level_range: Range<u8>) -> Self {
        self.bar_count = bar_count;
        self.level_range = level_range;
        self
    }

    pub fn with_recognized_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.recognized_phrase = phrase.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
