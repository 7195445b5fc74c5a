//! Platform directories for the Jarvis shell.

use std::fs;
use std::path::PathBuf;

use jarvis_common::PlatformError;

const APP_NAME: &str = "jarvis";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf, PlatformError> {
    base.map(|dir| dir.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError(format!("could not determine {kind} directory")))
}

/// `$XDG_CONFIG_HOME/jarvis` on Linux, `~/Library/Application Support/jarvis`
/// on macOS, `%APPDATA%\jarvis` on Windows.
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    app_dir(dirs::config_dir(), "config")
}

pub fn data_dir() -> Result<PathBuf, PlatformError> {
    app_dir(dirs::data_dir(), "data")
}

/// Create the config and data directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirs_end_with_app_name() {
        assert!(config_dir().unwrap().ends_with("jarvis"));
        assert!(data_dir().unwrap().ends_with("jarvis"));
    }

    #[test]
    fn missing_base_is_path_error() {
        let err = app_dir(None, "cache").unwrap_err();
        assert!(err.to_string().contains("cache"));
    }
}
