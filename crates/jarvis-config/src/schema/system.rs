//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for all Jarvis crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "jarvis=debug",
            LogLevel::Info => "jarvis=info",
            LogLevel::Warning => "jarvis=warn",
            LogLevel::Error => "jarvis=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Include span/target details in log lines.
    pub verbose: bool,
}
