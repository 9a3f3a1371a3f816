//! Proxy-window and activation timing settings.

use serde::{Deserialize, Serialize};

/// `[taskbar]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaskbarConfig {
    /// Re-activations closer than this to the last popup are ignored (valid range: 0-5000).
    pub guard_interval_ms: u64,
    /// A hook cursor sample older than this is stale (valid range: 0-5000).
    pub sample_freshness_ms: u64,
    /// Periodic registry resync; 0 disables (valid range: 0-86400).
    pub resync_interval_secs: u64,
    /// Prefix of each proxy window's taskbar grouping identity.
    pub identity_prefix: String,
    /// Nominal taskbar button size in DIPs (valid range: 1-512).
    pub button_width: u32,
    pub button_height: u32,
}

impl Default for TaskbarConfig {
    fn default() -> Self {
        Self {
            guard_interval_ms: 600,
            sample_freshness_ms: 300,
            resync_interval_secs: 30,
            identity_prefix: "TaskDock.Group".into(),
            button_width: 44,
            button_height: 48,
        }
    }
}
