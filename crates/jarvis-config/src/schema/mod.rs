//! Configuration schema types for Jarvis.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the desktop shell.

mod conversation;
mod system;
mod telemetry;
mod voice;
mod window;

pub use conversation::*;
pub use system::*;
pub use telemetry::*;
pub use voice::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Jarvis.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct JarvisConfig {
    pub conversation: ConversationConfig,
    pub voice: VoiceConfig,
    pub window: WindowConfig,
    pub telemetry: TelemetryConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_conversation_settings() {
        let config = JarvisConfig::default();
        assert_eq!(config.conversation.reply_delay_ms, 1000);
        assert_eq!(
            config.conversation.greeting,
            "Hello! I am Jarvis, your AI assistant. How can I help you today?"
        );
        assert!(config.conversation.reply_template.contains(REPLY_PLACEHOLDER));
        assert_eq!(config.conversation.user_label, "You");
        assert_eq!(config.conversation.assistant_label, "Jarvis");
    }

    #[test]
    fn default_voice_settings() {
        let config = JarvisConfig::default();
        assert_eq!(config.voice.sample_interval_ms, 100);
        assert_eq!(config.voice.capture_duration_ms, 3000);
        assert_eq!(config.voice.bar_count, 15);
        assert_eq!(config.voice.min_level, 5);
        assert_eq!(config.voice.max_level, 35);
        assert_eq!(
            config.voice.recognized_phrase,
            "What is the weather like today?"
        );
        assert!(config.voice.seed.is_none());
    }

    #[test]
    fn default_window_settings() {
        let config = JarvisConfig::default();
        assert_eq!(config.window.title, "Jarvis AI Assistant");
        assert_eq!((config.window.width, config.window.height), (1200, 800));
        assert_eq!(
            (config.window.min_width, config.window.min_height),
            (800, 600)
        );
        assert_eq!(config.window.background, "#121212");
        assert!(config.window.frameless);
        assert!(!config.window.start_maximized);
    }

    #[test]
    fn default_telemetry_settings() {
        let config = JarvisConfig::default();
        assert_eq!(config.telemetry.clock_interval_ms, 1000);
        assert_eq!(config.telemetry.status_interval_ms, 5000);
        assert_eq!((config.telemetry.cpu_min, config.telemetry.cpu_max), (10, 40));
        assert_eq!(
            (config.telemetry.memory_min, config.telemetry.memory_max),
            (20, 60)
        );
        assert_eq!(config.telemetry.battery_percent, 85);
        assert_eq!(config.telemetry.network_status, "Connected");
        assert_eq!(config.telemetry.weather.location, "New York");
        assert_eq!(config.telemetry.weather.temperature, "72°F");
    }

    #[test]
    fn default_logging_settings() {
        let config = JarvisConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "jarvis=info");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let toml_str = r#"
[conversation]
reply_delay_ms = 250

[voice]
seed = 42
"#;
        let config: JarvisConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.conversation.reply_delay_ms, 250);
        assert_eq!(config.voice.seed, Some(42));
        assert_eq!(config.conversation.assistant_label, "Jarvis");
        assert_eq!(config.voice.capture_duration_ms, 3000);
        assert_eq!(config.window.width, 1200);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: JarvisConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "jarvis=debug");
    }

    #[test]
    fn empty_toml_is_default() {
        let config: JarvisConfig = toml::from_str("").unwrap();
        assert_eq!(config.conversation.reply_delay_ms, 1000);
        assert_eq!(config.telemetry.battery_percent, 85);
    }
}
