//! Validation for the conversation and voice sections.

use crate::schema::{JarvisConfig, REPLY_PLACEHOLDER};

use super::helpers::{validate_half_open, validate_range};

/// Validate conversation constraints.
pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &JarvisConfig) {
    let conversation = &config.conversation;
    validate_range(
        errors,
        "conversation.reply_delay_ms",
        conversation.reply_delay_ms,
        0,
        60_000,
    );
    if !conversation.reply_template.contains(REPLY_PLACEHOLDER) {
        errors.push(format!(
            "conversation.reply_template must contain {REPLY_PLACEHOLDER}"
        ));
    }
    if conversation.greeting.trim().is_empty() {
        errors.push("conversation.greeting must not be empty".into());
    }
}

/// Validate voice capture constraints.
pub(crate) fn validate_voice(errors: &mut Vec<String>, config: &JarvisConfig) {
    let voice = &config.voice;
    validate_range(
        errors,
        "voice.sample_interval_ms",
        voice.sample_interval_ms,
        10,
        1000,
    );
    validate_range(
        errors,
        "voice.capture_duration_ms",
        voice.capture_duration_ms,
        100,
        60_000,
    );
    validate_range(errors, "voice.bar_count", voice.bar_count, 1, 64);
    validate_half_open(
        errors,
        "voice.min_level..voice.max_level",
        voice.min_level,
        voice.max_level,
        255,
    );
}
