//! Platform collaborators for the assistant shell: window chrome, simulated
//! telemetry, host system info and platform directories.

pub mod chrome;
pub mod paths;
pub mod system;
pub mod telemetry;

pub use chrome::{HeadlessChrome, WindowChrome, WindowState};
pub use paths::{config_dir, data_dir, ensure_dirs};
pub use system::SystemInfo;
pub use telemetry::{SimulatedTelemetry, TelemetrySnapshot, TelemetrySource, WeatherReport};
