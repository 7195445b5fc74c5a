//! Default config location and first-run file creation.

use std::fs;
use std::path::{Path, PathBuf};

use jarvis_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "jarvis";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/jarvis/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented default config to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, default_config_toml()).map_err(write_error)?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
