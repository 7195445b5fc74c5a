//! Top-level host state.
//!
//! `ShellApp` owns the config, the window registry (one conversation session
//! per window), the simulated telemetry source and the event bus. The REPL
//! in `main` feeds it commands and polls it on a timer.

mod commands;
mod core;
mod ipc;
mod polling;
mod render;
mod shutdown;
mod windows;

pub use commands::Command;
pub use core::ShellApp;
pub use polling::log_events;
