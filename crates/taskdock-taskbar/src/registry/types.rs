use taskdock_common::types::{GroupIcon, GroupId};
use taskdock_platform::NativeHandle;

/// Activation state of a proxy window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    /// Minimized on the taskbar, waiting for a click.
    #[default]
    Idle,
    /// Restored by a click and being handled.
    Activating,
}

/// One group's taskbar presence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyWindow {
    pub group_id: GroupId,
    pub handle: NativeHandle,
    pub title: String,
    pub icon: GroupIcon,
    pub state: WindowState,
    /// Whether the activation hook went in; without it only immediate samples exist.
    pub hooked: bool,
}

/// Result of `create_or_update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created(NativeHandle),
    Updated,
    Unchanged,
}

/// What one `sync` pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
    pub failed: usize,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0 && self.failed == 0
    }
}
