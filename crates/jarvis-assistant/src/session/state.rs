//! Serializable conversation state.

use chrono::{DateTime, Utc};
use jarvis_common::SessionId;
use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageId, Sender};
use crate::mode::InputMode;

/// Everything the presentation layer renders for one conversation panel.
///
/// Only the session mutates it; callers get a shared reference or a clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    session_id: SessionId,
    timeline: Vec<Message>,
    input_mode: InputMode,
    pending_replies: usize,
}

impl ConversationState {
    pub(crate) fn new(greeting: String, created_at: DateTime<Utc>) -> Self {
        let mut state = Self {
            session_id: SessionId::new(),
            timeline: Vec::new(),
            input_mode: InputMode::idle(),
            pending_replies: 0,
        };
        state.append(Sender::Assistant, greeting, created_at);
        state
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn timeline(&self) -> &[Message] {
        &self.timeline
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn draft(&self) -> &str {
        self.input_mode.draft()
    }

    /// Replies scheduled but not yet in the timeline.
    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Look a message up by id. Ids are dense from 1 in timeline order.
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        let index = usize::try_from(id.0.checked_sub(1)?).ok()?;
        self.timeline.get(index).filter(|message| message.id() == id)
    }

    pub(crate) fn append(
        &mut self,
        sender: Sender,
        content: String,
        timestamp: DateTime<Utc>,
    ) -> MessageId {
        let id = self
            .timeline
            .last()
            .map_or(MessageId(1), |last| last.id().next());
        self.timeline
            .push(Message::new(id, sender, content, timestamp));
        id
    }

    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub(crate) fn set_pending_replies(&mut self, pending: usize) {
        self.pending_replies = pending;
    }
}
