//! Host platform description for `get-system-info`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system, e.g. `linux`, `macos`, `windows`.
    pub platform: String,
    pub arch: String,
    pub family: String,
    /// Shell version.
    pub version: String,
}

impl SystemInfo {
    pub fn current() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            family: std::env::consts::FAMILY.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
