//! Conversation panel configuration types.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the user's text in [`ConversationConfig::reply_template`].
pub const REPLY_PLACEHOLDER: &str = "{text}";

/// Conversation panel settings: the seeded greeting and the simulated reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// First assistant message of every session.
    pub greeting: String,
    /// Delay before the simulated reply is appended (valid range: 0-60000).
    pub reply_delay_ms: u32,
    /// Reply text; `{text}` is replaced with the submitted message.
    pub reply_template: String,
    pub user_label: String,
    pub assistant_label: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello! I am Jarvis, your AI assistant. How can I help you today?".into(),
            reply_delay_ms: 1000,
            reply_template: "I'm processing your request: \"{text}\"".into(),
            user_label: "You".into(),
            assistant_label: "Jarvis".into(),
        }
    }
}
