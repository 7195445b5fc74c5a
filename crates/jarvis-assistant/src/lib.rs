//! Conversation core for the Jarvis assistant shell.
//!
//! Provides:
//! - An append-only message timeline seeded with a greeting
//! - The input mode state machine (idle / composing / listening)
//! - Simulated assistant replies dispatched after a configurable delay
//! - A simulated voice level meter and capture timeout
//! - A virtual-clock timer queue that drives all of the above

pub mod levels;
pub mod message;
pub mod mode;
pub mod responder;
pub mod scheduler;
pub mod session;

pub use jarvis_common::ConversationError;
pub use levels::LevelMeter;
pub use message::{Message, MessageId, Sender};
pub use mode::InputMode;
pub use responder::{Responder, TemplateResponder, DEFAULT_REPLY_TEMPLATE};
pub use scheduler::{TimerId, TimerQueue};
pub use session::{Conversation, ConversationState, SessionConfig, SessionEvent};
