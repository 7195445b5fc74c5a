//! Full configuration validation.
//!
//! Validates numeric ranges, the reply template, and color formats.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod conversation;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::JarvisConfig;
use jarvis_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &JarvisConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    conversation::validate_conversation(&mut errors, config);
    conversation::validate_voice(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_telemetry(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
