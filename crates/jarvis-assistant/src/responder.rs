//! Reply dispatch contract.
//!
//! A `Responder` turns a submitted message into the assistant's reply text.
//! The shell ships with a template responder; a real model client would
//! implement the same trait.

/// Template used when none is configured.
pub const DEFAULT_REPLY_TEMPLATE: &str = "I'm processing your request: \"{text}\"";

const PLACEHOLDER: &str = "{text}";

pub trait Responder: Send + Sync {
    fn respond(&self, text: &str) -> String;
}

/// Substitutes the user's text into a fixed template.
///
/// Only the template is scanned for `{text}`; the inserted text is copied
/// verbatim, so user input containing quotes or `{text}` survives intact.
#[derive(Debug, Clone)]
pub struct TemplateResponder {
    template: String,
}

impl TemplateResponder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Default for TemplateResponder {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_TEMPLATE)
    }
}

impl Responder for TemplateResponder {
    fn respond(&self, text: &str) -> String {
        self.template.replace(PLACEHOLDER, text)
    }
}
