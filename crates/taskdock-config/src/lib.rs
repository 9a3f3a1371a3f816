//! TaskDock configuration.
//!
//! TOML-based settings with serde defaults for every section, range
//! validation, and a debounced watcher for the persisted group store.

pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use schema::{
    LogLevel, LoggingConfig, PopupConfig, StoreConfig, TaskbarConfig, TaskdockConfig,
    CONFIG_SCHEMA_VERSION,
};
pub use watcher::StoreWatcher;

use std::path::Path;
use taskdock_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<TaskdockConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<TaskdockConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TaskdockConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TaskdockConfig::default());
        assert!(json.contains("\"taskbar\""));
        assert!(json.contains("\"popup\""));
        assert!(json.contains("\"store\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[popup]\nitems_per_row = 0\n").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn load_config_from_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[taskbar]\nsample_freshness_ms = 250\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.taskbar.sample_freshness_ms, 250);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = TaskdockConfig::default();
        let parsed: TaskdockConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed, config);
    }
}
