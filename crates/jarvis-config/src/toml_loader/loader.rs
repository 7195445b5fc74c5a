//! Core TOML config loading: read from path or platform default.

use crate::schema::JarvisConfig;
use crate::validation;
use jarvis_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A missing file is reported as
/// `ConfigError::FileNotFound`. Validation failures are logged and the parsed
/// config is returned as-is; [`crate::load_config`] is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<JarvisConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: JarvisConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, creating a commented default file there if it
/// does not exist yet.
pub fn load_or_create(path: &Path) -> Result<JarvisConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(JarvisConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/jarvis/config.toml`
/// On Linux: `~/.config/jarvis/config.toml`
pub fn load_default() -> Result<JarvisConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
