//! The conversation session: operations and timer handling.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use jarvis_common::{ConversationError, SessionId};
use tracing::{debug, info};

use crate::levels::LevelMeter;
use crate::message::{Message, MessageId, Sender};
use crate::mode::InputMode;
use crate::responder::{Responder, TemplateResponder};
use crate::scheduler::{TimerId, TimerQueue};

use super::config::SessionConfig;
use super::state::ConversationState;

/// Work scheduled on the session's timer queue.
#[derive(Debug, Clone)]
enum Task {
    DeliverReply { content: String },
    SampleLevels,
    FinishCapture,
}

/// Timers belonging to an active voice capture.
#[derive(Debug, Clone, Copy)]
struct Capture {
    sampler: TimerId,
    timeout: TimerId,
}

/// Change notifications for the presentation layer. Drained with
/// [`Conversation::drain_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MessageAppended { id: MessageId, sender: Sender },
    /// Carries the mode as it was entered.
    ModeChanged { mode: InputMode },
    LevelsUpdated,
}

/// One conversation panel session.
///
/// Single-threaded: every mutation happens through `&mut self`, and timers
/// fire only inside [`advance`](Self::advance) / [`advance_to`](Self::advance_to).
pub struct Conversation {
    state: ConversationState,
    config: SessionConfig,
    responder: Box<dyn Responder>,
    timers: TimerQueue<Task>,
    meter: LevelMeter,
    capture: Option<Capture>,
    replies: Vec<TimerId>,
    events: Vec<SessionEvent>,
    epoch: DateTime<Utc>,
}

impl Conversation {
    pub fn new(config: SessionConfig) -> Self {
        Self::starting_at(config, Utc::now())
    }

    /// Create a session whose virtual clock starts at `epoch`. Message
    /// timestamps are `epoch` plus the virtual time elapsed.
    pub fn starting_at(config: SessionConfig, epoch: DateTime<Utc>) -> Self {
        let meter = match config.seed {
            Some(seed) => LevelMeter::new(config.bar_count, config.level_range.clone(), seed),
            None => LevelMeter::from_entropy(config.bar_count, config.level_range.clone()),
        };
        let state = ConversationState::new(config.greeting.clone(), epoch);
        debug!(session = %state.session_id(), "conversation session created");

        Self {
            state,
            config,
            responder: Box::new(TemplateResponder::default()),
            timers: TimerQueue::new(),
            meter,
            capture: None,
            replies: Vec::new(),
            events: Vec::new(),
            epoch,
        }
    }

    pub fn with_responder(mut self, responder: impl Responder + 'static) -> Self {
        self.responder = Box::new(responder);
        self
    }

    // -- Read access ---------------------------------------------------------

    pub fn id(&self) -> &SessionId {
        self.state.session_id()
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Owned copy of the state, for serialization or handing across threads.
    pub fn snapshot(&self) -> ConversationState {
        self.state.clone()
    }

    pub fn timeline(&self) -> &[Message] {
        self.state.timeline()
    }

    pub fn input_mode(&self) -> &InputMode {
        self.state.input_mode()
    }

    pub fn draft(&self) -> &str {
        self.state.draft()
    }

    pub fn is_listening(&self) -> bool {
        self.capture.is_some()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Virtual time elapsed since the session started.
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    /// Virtual time of the next timer, if any is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Operations ----------------------------------------------------------

    /// Append a user message and schedule exactly one reply for it.
    ///
    /// Replies are independent: a later submission never cancels an earlier
    /// reply that is still pending.
    pub fn submit_message(&mut self, text: &str) -> Result<MessageId, ConversationError> {
        if text.trim().is_empty() {
            return Err(ConversationError::EmptyInput);
        }
        if self.is_listening() {
            return Err(ConversationError::ModeConflict);
        }

        let id = self.append(Sender::User, text.to_string());
        self.set_mode(InputMode::idle());

        let content = self.responder.respond(text);
        let timer = self
            .timers
            .schedule_once(self.config.reply_delay, Task::DeliverReply { content });
        self.replies.push(timer);
        self.state.set_pending_replies(self.replies.len());

        debug!(
            session = %self.id(),
            message = %id,
            pending = self.replies.len(),
            "user message submitted"
        );
        Ok(id)
    }

    /// Submit whatever is in the input box.
    pub fn submit_draft(&mut self) -> Result<MessageId, ConversationError> {
        let draft = self.draft().to_string();
        self.submit_message(&draft)
    }

    /// Replace the draft. Rejected while a voice capture is running.
    pub fn update_draft(&mut self, text: impl Into<String>) -> Result<(), ConversationError> {
        if self.is_listening() {
            return Err(ConversationError::ModeConflict);
        }
        self.set_mode(InputMode::Composing { draft: text.into() });
        Ok(())
    }

    /// Begin a simulated voice capture, discarding any draft.
    ///
    /// Returns `false` without changing anything if a capture is already
    /// running.
    pub fn start_listening(&mut self) -> bool {
        if self.is_listening() {
            return false;
        }

        self.meter.restart();
        let sampler = self
            .timers
            .schedule_repeating(self.config.sample_interval, Task::SampleLevels);
        let timeout = self
            .timers
            .schedule_once(self.config.capture_duration, Task::FinishCapture);
        self.capture = Some(Capture { sampler, timeout });
        self.set_mode(InputMode::Listening { levels: Vec::new() });

        info!(session = %self.id(), "voice capture started");
        true
    }

    /// Cancel the running capture and return to an empty draft.
    ///
    /// Idempotent: returns `false` and does nothing when not listening.
    pub fn stop_listening(&mut self) -> bool {
        let Some(capture) = self.capture.take() else {
            return false;
        };
        self.timers.cancel(capture.sampler);
        self.timers.cancel(capture.timeout);
        self.set_mode(InputMode::idle());

        info!(session = %self.id(), "voice capture stopped");
        true
    }

    /// Advance the virtual clock by `by`, firing every timer that falls due.
    /// Returns how many timers fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now() + by;
        self.advance_to(until)
    }

    /// Advance the virtual clock to `until` (no-op if already past it).
    pub fn advance_to(&mut self, until: Duration) -> usize {
        let mut fired = 0;
        while let Some((id, task)) = self.timers.pop_due(until) {
            self.run(id, task);
            fired += 1;
        }
        self.timers.set_now(until);
        fired
    }

    /// Tear the session down: cancel every pending timer, including replies
    /// and an active capture. Returns how many timers were cancelled.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self.timers.clear();
        self.replies.clear();
        self.state.set_pending_replies(0);
        if self.capture.take().is_some() {
            self.set_mode(InputMode::idle());
        }
        info!(session = %self.id(), cancelled, "conversation session shut down");
        cancelled
    }

    // -- Internals -----------------------------------------------------------

    fn run(&mut self, id: TimerId, task: Task) {
        match task {
            Task::DeliverReply { content } => {
                self.replies.retain(|reply| *reply != id);
                self.state.set_pending_replies(self.replies.len());
                let message = self.append(Sender::Assistant, content);
                debug!(session = %self.id(), %message, "assistant reply delivered");
            }
            Task::SampleLevels => {
                if !self.is_listening() {
                    return;
                }
                if let Some(levels) = self.meter.next() {
                    self.state.set_mode(InputMode::Listening { levels });
                    self.events.push(SessionEvent::LevelsUpdated);
                }
            }
            Task::FinishCapture => {
                let Some(capture) = self.capture.take() else {
                    return;
                };
                self.timers.cancel(capture.sampler);
                let draft = self.config.recognized_phrase.clone();
                self.set_mode(InputMode::Idle { draft });
                info!(session = %self.id(), "voice capture finished");
            }
        }
    }

    fn append(&mut self, sender: Sender, content: String) -> MessageId {
        let id = self.state.append(sender, content, self.timestamp());
        self.events.push(SessionEvent::MessageAppended { id, sender });
        id
    }

    fn set_mode(&mut self, mode: InputMode) {
        let changed = self.state.input_mode().name() != mode.name();
        self.state.set_mode(mode);
        if changed {
            self.events.push(SessionEvent::ModeChanged {
                mode: self.state.input_mode().clone(),
            });
        }
    }

    fn timestamp(&self) -> DateTime<Utc> {
        TimeDelta::from_std(self.timers.now())
            .ok()
            .and_then(|delta| self.epoch.checked_add_signed(delta))
            .unwrap_or(self.epoch)
    }
}
