//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = JarvisConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_reply_delay_too_large() {
    let mut config = JarvisConfig::default();
    config.conversation.reply_delay_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.reply_delay_ms"));
}

#[test]
fn zero_reply_delay_is_allowed() {
    let mut config = JarvisConfig::default();
    config.conversation.reply_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_template_without_placeholder() {
    let mut config = JarvisConfig::default();
    config.conversation.reply_template = "Working on it".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.reply_template"));
}

#[test]
fn catches_blank_greeting() {
    let mut config = JarvisConfig::default();
    config.conversation.greeting = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.greeting"));
}

#[test]
fn catches_sample_interval_too_fast() {
    let mut config = JarvisConfig::default();
    config.voice.sample_interval_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.sample_interval_ms"));
}

#[test]
fn catches_zero_bars() {
    let mut config = JarvisConfig::default();
    config.voice.bar_count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.bar_count"));
}

#[test]
fn catches_empty_level_range() {
    let mut config = JarvisConfig::default();
    config.voice.min_level = 35;
    config.voice.max_level = 35;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.min_level..voice.max_level"));
}

#[test]
fn catches_level_range_past_u8() {
    let mut config = JarvisConfig::default();
    config.voice.max_level = 256;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.min_level..voice.max_level"));
}

#[test]
fn catches_window_smaller_than_minimum() {
    let mut config = JarvisConfig::default();
    config.window.width = 640;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_bad_background_color() {
    let mut config = JarvisConfig::default();
    config.window.background = "dark".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.background"));
}

#[test]
fn catches_battery_over_100() {
    let mut config = JarvisConfig::default();
    config.telemetry.battery_percent = 120;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("telemetry.battery_percent"));
}

#[test]
fn catches_inverted_cpu_range() {
    let mut config = JarvisConfig::default();
    config.telemetry.cpu_min = 50;
    config.telemetry.cpu_max = 40;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("telemetry.cpu_min..telemetry.cpu_max"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = JarvisConfig::default();
    config.voice.bar_count = 0;
    config.telemetry.battery_percent = 200;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.bar_count"));
    assert!(err.contains("telemetry.battery_percent"));
    assert!(err.contains("; "));
}
