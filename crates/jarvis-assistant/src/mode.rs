//! Input mode: typing a draft vs. capturing voice.

use serde::{Deserialize, Serialize};

/// The mutually exclusive input mode of a conversation panel.
///
/// `Idle` holds staged text that was not typed by the user (empty after a
/// send, the recognized phrase after a capture). `Listening` holds the most
/// recent level meter frame and never a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum InputMode {
    Idle { draft: String },
    Composing { draft: String },
    Listening { levels: Vec<u8> },
}

impl InputMode {
    pub fn idle() -> Self {
        InputMode::Idle {
            draft: String::new(),
        }
    }

    /// Text currently in the input box. Empty while listening.
    pub fn draft(&self) -> &str {
        match self {
            InputMode::Idle { draft } | InputMode::Composing { draft } => draft,
            InputMode::Listening { .. } => "",
        }
    }

    pub fn levels(&self) -> Option<&[u8]> {
        match self {
            InputMode::Listening { levels } => Some(levels),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, InputMode::Idle { .. })
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, InputMode::Listening { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputMode::Idle { .. } => "idle",
            InputMode::Composing { .. } => "composing",
            InputMode::Listening { .. } => "listening",
        }
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_with_empty_draft() {
        let mode = InputMode::default();
        assert!(mode.is_idle());
        assert_eq!(mode.draft(), "");
        assert_eq!(mode.name(), "idle");
    }

    #[test]
    fn listening_has_no_draft() {
        let mode = InputMode::Listening {
            levels: vec![5, 12, 30],
        };
        assert_eq!(mode.draft(), "");
        assert_eq!(mode.levels(), Some(&[5u8, 12, 30][..]));
        assert!(mode.is_listening());
    }

    #[test]
    fn composing_exposes_draft() {
        let mode = InputMode::Composing {
            draft: "turn on the lights".into(),
        };
        assert_eq!(mode.draft(), "turn on the lights");
        assert!(mode.levels().is_none());
        assert_eq!(mode.name(), "composing");
    }

    #[test]
    fn serializes_with_mode_tag() {
        let mode = InputMode::Composing {
            draft: "hey".into(),
        };
        let json = serde_json::to_value(&mode).unwrap();
        assert_eq!(json["mode"], "composing");
        assert_eq!(json["draft"], "hey");

        let back: InputMode = serde_json::from_value(json).unwrap();
        assert_eq!(back, mode);
    }
}
