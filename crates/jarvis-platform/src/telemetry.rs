//! Simulated dashboard telemetry.
//!
//! Values are placeholders: CPU and memory are re-rolled on a fixed cadence,
//! battery and network are constant, and the clock follows local time.

use std::time::Duration;

use chrono::{DateTime, Local};
use jarvis_config::schema::{TelemetryConfig, WeatherConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What the status bar and dashboard render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub cpu_percent: u32,
    pub memory_percent: u32,
    pub network_status: String,
    pub battery_percent: u32,
    pub current_time: String,
    pub current_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: String,
    pub condition: String,
    pub forecast: String,
}

impl From<&WeatherConfig> for WeatherReport {
    fn from(config: &WeatherConfig) -> Self {
        Self {
            location: config.location.clone(),
            temperature: config.temperature.clone(),
            condition: config.condition.clone(),
            forecast: config.forecast.clone(),
        }
    }
}

pub trait TelemetrySource: Send {
    fn snapshot(&self) -> &TelemetrySnapshot;

    /// Weather for `location`, or the configured default location.
    fn weather(&self, location: Option<&str>) -> WeatherReport;

    /// Bring values up to date for `elapsed` time since start, using `now`
    /// for the clock. Returns `true` if anything was refreshed.
    fn tick(&mut self, elapsed: Duration, now: DateTime<Local>) -> bool;
}

pub fn format_time(now: &DateTime<Local>) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

pub struct SimulatedTelemetry {
    config: TelemetryConfig,
    rng: StdRng,
    snapshot: TelemetrySnapshot,
    clock_interval: Duration,
    status_interval: Duration,
    next_clock: Duration,
    next_status: Duration,
}

impl SimulatedTelemetry {
    pub fn new(config: TelemetryConfig, seed: Option<u64>, now: DateTime<Local>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snapshot = TelemetrySnapshot {
            cpu_percent: roll(&mut rng, config.cpu_min, config.cpu_max),
            memory_percent: roll(&mut rng, config.memory_min, config.memory_max),
            network_status: config.network_status.clone(),
            battery_percent: config.battery_percent,
            current_time: format_time(&now),
            current_date: format_date(&now),
        };
        let clock_interval = interval(config.clock_interval_ms);
        let status_interval = interval(config.status_interval_ms);

        Self {
            config,
            rng,
            snapshot,
            clock_interval,
            status_interval,
            next_clock: clock_interval,
            next_status: status_interval,
        }
    }
}

impl TelemetrySource for SimulatedTelemetry {
    fn snapshot(&self) -> &TelemetrySnapshot {
        &self.snapshot
    }

    fn weather(&self, location: Option<&str>) -> WeatherReport {
        let mut report = WeatherReport::from(&self.config.weather);
        if let Some(location) = location.filter(|l| !l.trim().is_empty()) {
            report.location = location.to_string();
        }
        report
    }

    fn tick(&mut self, elapsed: Duration, now: DateTime<Local>) -> bool {
        let mut changed = false;

        if elapsed >= self.next_clock {
            self.snapshot.current_time = format_time(&now);
            self.snapshot.current_date = format_date(&now);
            self.next_clock = catch_up(self.next_clock, self.clock_interval, elapsed);
            changed = true;
        }

        if elapsed >= self.next_status {
            self.snapshot.cpu_percent =
                roll(&mut self.rng, self.config.cpu_min, self.config.cpu_max);
            self.snapshot.memory_percent =
                roll(&mut self.rng, self.config.memory_min, self.config.memory_max);
            self.next_status = catch_up(self.next_status, self.status_interval, elapsed);
            trace!(
                cpu = self.snapshot.cpu_percent,
                memory = self.snapshot.memory_percent,
                "system status re-rolled"
            );
            changed = true;
        }

        changed
    }
}

fn interval(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms.max(1)))
}

/// First multiple of `interval` after `deadline` that is past `elapsed`.
fn catch_up(mut deadline: Duration, interval: Duration, elapsed: Duration) -> Duration {
    while deadline <= elapsed {
        deadline += interval;
    }
    deadline
}

/// Uniform value in `min..max`, or `min` when the range is empty.
fn roll(rng: &mut StdRng, min: u32, max: u32) -> u32 {
    if min < max {
        rng.gen_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, h, m, s).unwrap()
    }

    fn telemetry() -> SimulatedTelemetry {
        SimulatedTelemetry::new(TelemetryConfig::default(), Some(3), at(9, 5, 0))
    }

    #[test]
    fn initial_snapshot_uses_defaults() {
        let t = telemetry();
        let snap = t.snapshot();
        assert!((10..40).contains(&snap.cpu_percent));
        assert!((20..60).contains(&snap.memory_percent));
        assert_eq!(snap.battery_percent, 85);
        assert_eq!(snap.network_status, "Connected");
        assert_eq!(snap.current_time, "9:05:00 AM");
        assert_eq!(snap.current_date, "3/9/2024");
    }

    #[test]
    fn clock_refreshes_every_second() {
        let mut t = telemetry();
        assert!(!t.tick(Duration::from_millis(999), at(9, 5, 0)));
        assert!(t.tick(Duration::from_millis(1000), at(13, 5, 1)));
        assert_eq!(t.snapshot().current_time, "1:05:01 PM");
    }

    #[test]
    fn status_rerolls_on_its_own_cadence() {
        let mut t = telemetry();
        for second in 1..=20u64 {
            t.tick(Duration::from_secs(second), at(9, 5, 0));
            let snap = t.snapshot();
            assert!((10..40).contains(&snap.cpu_percent));
            assert!((20..60).contains(&snap.memory_percent));
        }
        assert!(!t.tick(Duration::from_millis(20_500), at(9, 5, 20)));
    }

    #[test]
    fn long_gap_does_not_replay_missed_ticks() {
        let mut t = telemetry();
        assert!(t.tick(Duration::from_millis(12_345), at(9, 5, 12)));
        assert!(!t.tick(Duration::from_millis(12_999), at(9, 5, 12)));
        assert!(t.tick(Duration::from_millis(13_000), at(9, 5, 13)));
    }

    #[test]
    fn empty_range_pins_value() {
        let config = TelemetryConfig {
            cpu_min: 50,
            cpu_max: 50,
            ..Default::default()
        };
        let t = SimulatedTelemetry::new(config, Some(1), at(0, 0, 0));
        assert_eq!(t.snapshot().cpu_percent, 50);
    }

    #[test]
    fn weather_defaults_and_overrides_location() {
        let t = telemetry();
        let report = t.weather(None);
        assert_eq!(report.location, "New York");
        assert_eq!(report.temperature, "72°F");
        assert_eq!(report.condition, "Sunny");
        assert_eq!(report.forecast, "Clear skies");

        assert_eq!(t.weather(Some("Paris")).location, "Paris");
        assert_eq!(t.weather(Some("  ")).location, "New York");
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let json = serde_json::to_value(telemetry().snapshot()).unwrap();
        assert!(json.get("cpuPercent").is_some());
        assert!(json.get("batteryPercent").is_some());
        assert!(json.get("currentDate").is_some());
    }
}
