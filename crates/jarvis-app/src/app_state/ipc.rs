//! IPC message validation and dispatch from the presentation layer.

use jarvis_common::{new_correlation_id, Event, JarvisError, WindowId};
use jarvis_platform::{SystemInfo, TelemetrySource, WindowChrome};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::core::ShellApp;
use super::windows::ShellWindow;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "minimize-window",
    "maximize-window",
    "close-window",
    "submit-message",
    "update-draft",
    "start-listening",
    "stop-listening",
    "get-system-info",
    "get-telemetry",
    "get-weather",
    "start-voice-recognition",
    "stop-voice-recognition",
    "start-face-recognition",
    "stop-face-recognition",
];

pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// `{"kind": ..., "payload": ...}`. The payload is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    pub fn bare(kind: impl Into<String>) -> Self {
        Self::new(kind, Value::Null)
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// A bare string payload, or the string under `key` in an object payload.
    fn text(&self, key: &str) -> Option<&str> {
        match &self.payload {
            Value::String(text) => Some(text),
            Value::Object(map) => map.get(key).and_then(Value::as_str),
            _ => None,
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ShellApp {
    /// Parse and dispatch a raw IPC message.
    pub fn handle_ipc_message(&mut self, body: &str) -> Result<Option<Value>, JarvisError> {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return Err(JarvisError::Ipc("malformed message".into()));
        };
        self.dispatch_ipc(&msg)
    }

    /// Dispatch an IPC message to the active window or the host.
    ///
    /// Returns the response payload for query kinds.
    pub fn dispatch_ipc(&mut self, msg: &IpcMessage) -> Result<Option<Value>, JarvisError> {
        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return Err(JarvisError::Ipc(format!("unknown kind: {}", msg.kind)));
        }

        let correlation = new_correlation_id();
        tracing::debug!(%correlation, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "get-system-info" => Ok(Some(json!(SystemInfo::current()))),
            "get-telemetry" => Ok(Some(json!(self.telemetry.snapshot()))),
            "get-weather" => {
                let report = self.telemetry.weather(msg.text("location"));
                Ok(Some(json!(report)))
            }
            "start-voice-recognition" | "stop-voice-recognition" | "start-face-recognition"
            | "stop-face-recognition" => {
                tracing::info!(%correlation, kind = %msg.kind, "recognition is not available");
                Ok(None)
            }
            "close-window" => {
                let (id, _) = self.require_active()?;
                self.close_window(id);
                Ok(None)
            }
            "minimize-window" | "maximize-window" => {
                let (id, window) = self.require_active()?;
                if msg.kind == "minimize-window" {
                    window.chrome.minimize();
                } else {
                    window.chrome.maximize();
                }
                let state = window.chrome.state().to_string();
                self.event_bus
                    .publish(Event::WindowStateChanged { window: id, state });
                Ok(None)
            }
            "submit-message" => {
                let (_, window) = self.require_active()?;
                let conversation = &mut window.conversation;
                let id = match msg.text("text") {
                    Some(text) => conversation.submit_message(text)?,
                    None => conversation.submit_draft()?,
                };
                Ok(Some(json!({ "messageId": id.0 })))
            }
            "update-draft" => {
                let (_, window) = self.require_active()?;
                let text = msg.text("text").unwrap_or_default();
                window.conversation.update_draft(text)?;
                Ok(None)
            }
            "start-listening" => {
                let (_, window) = self.require_active()?;
                let changed = window.conversation.start_listening();
                Ok(Some(json!({ "changed": changed })))
            }
            "stop-listening" => {
                let (_, window) = self.require_active()?;
                let changed = window.conversation.stop_listening();
                Ok(Some(json!({ "changed": changed })))
            }
            _ => {
                // Shouldn't happen: allowlist checked above
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
                Ok(None)
            }
        }
    }

    fn require_active(&mut self) -> Result<(WindowId, &mut ShellWindow), JarvisError> {
        self.active_mut()
            .ok_or_else(|| JarvisError::Ipc("no active window".into()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
