//! Conversation sessions.
//!
//! A [`Conversation`] owns its state, its responder and its timer queue.
//! The host advances the session's clock; replies, level samples and the
//! capture timeout all fire from inside that call.

mod config;
mod manager;
mod state;

pub use config::SessionConfig;
pub use manager::{Conversation, SessionEvent};
pub use state::ConversationState;
