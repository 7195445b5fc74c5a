//! Simulated dashboard telemetry configuration types.

use serde::{Deserialize, Serialize};

/// Placeholder weather shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub location: String,
    pub temperature: String,
    pub condition: String,
    pub forecast: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            location: "New York".into(),
            temperature: "72°F".into(),
            condition: "Sunny".into(),
            forecast: "Clear skies".into(),
        }
    }
}

/// Dashboard telemetry settings.
///
/// CPU and memory ranges are half-open (`min..max`) percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Clock refresh cadence (valid range: 100-60000).
    pub clock_interval_ms: u32,
    /// CPU/memory refresh cadence (valid range: 100-600000).
    pub status_interval_ms: u32,
    pub cpu_min: u32,
    pub cpu_max: u32,
    pub memory_min: u32,
    pub memory_max: u32,
    pub battery_percent: u32,
    pub network_status: String,
    pub weather: WeatherConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1000,
            status_interval_ms: 5000,
            cpu_min: 10,
            cpu_max: 40,
            memory_min: 20,
            memory_max: 60,
            battery_percent: 85,
            network_status: "Connected".into(),
            weather: WeatherConfig::default(),
        }
    }
}
