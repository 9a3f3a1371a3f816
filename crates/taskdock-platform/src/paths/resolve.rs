use std::path::PathBuf;

use taskdock_common::PlatformError;

pub(super) const APP_NAME: &str = "taskdock";

/// Configuration directory (`config.toml`, default `groups.json`).
///
/// - Windows: `%APPDATA%\taskdock`
/// - Linux: `$XDG_CONFIG_HOME/taskdock`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Data directory.
///
/// - Windows: `%APPDATA%\taskdock`
/// - Linux: `$XDG_DATA_HOME/taskdock`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
