//! Validation for smaller config sections: window and telemetry.

use crate::schema::JarvisConfig;

use super::helpers::{validate_half_open, validate_range};

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &JarvisConfig) {
    let window = &config.window;
    if window.width < window.min_width {
        errors.push(format!(
            "window.width = {} is below window.min_width = {}",
            window.width, window.min_width
        ));
    }
    if window.height < window.min_height {
        errors.push(format!(
            "window.height = {} is below window.min_height = {}",
            window.height, window.min_height
        ));
    }
    if !is_hex_color(&window.background) {
        errors.push(format!(
            "window.background = {:?} is not a #rrggbb color",
            window.background
        ));
    }
}

/// Validate telemetry constraints.
pub(crate) fn validate_telemetry(errors: &mut Vec<String>, config: &JarvisConfig) {
    let telemetry = &config.telemetry;
    validate_range(
        errors,
        "telemetry.clock_interval_ms",
        telemetry.clock_interval_ms,
        100,
        60_000,
    );
    validate_range(
        errors,
        "telemetry.status_interval_ms",
        telemetry.status_interval_ms,
        100,
        600_000,
    );
    validate_half_open(
        errors,
        "telemetry.cpu_min..telemetry.cpu_max",
        telemetry.cpu_min,
        telemetry.cpu_max,
        101,
    );
    validate_half_open(
        errors,
        "telemetry.memory_min..telemetry.memory_max",
        telemetry.memory_min,
        telemetry.memory_max,
        101,
    );
    validate_range(
        errors,
        "telemetry.battery_percent",
        telemetry.battery_percent,
        0,
        100,
    );
}

fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
