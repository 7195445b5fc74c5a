//! Types shared by every Jarvis crate: the error taxonomy, ids and the
//! broadcast event bus.

pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, ConversationError, JarvisError, PlatformError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, SessionId, WindowId};

pub type Result<T> = std::result::Result<T, JarvisError>;
