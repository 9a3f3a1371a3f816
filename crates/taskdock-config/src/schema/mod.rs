//! Configuration schema types for TaskDock.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod popup;
mod store;
mod taskbar;

pub use logging::*;
pub use popup::*;
pub use store::*;
pub use taskbar::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaskdockConfig {
    pub taskbar: TaskbarConfig,
    pub popup: PopupConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
