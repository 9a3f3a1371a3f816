//! Location of the persisted group store.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use taskdock_common::ConfigError;

use crate::toml_loader::default_store_path;

/// `[store]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to `groups.json`; empty means next to `config.toml`.
    pub path: String,
    /// Resync as soon as the store file changes on disk.
    pub watch: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            watch: true,
        }
    }
}

impl StoreConfig {
    pub fn resolve_path(&self) -> Result<PathBuf, ConfigError> {
        if self.path.trim().is_empty() {
            default_store_path()
        } else {
            Ok(PathBuf::from(self.path.trim()))
        }
    }
}
