//! Taskbar buttons for shortcut groups.
//!
//! Each group gets a minimized proxy window so the OS shows a button for it.
//! Clicking the button restores the window; the service re-minimizes it and
//! opens the group's popup next to the click.

pub mod activation;
pub mod geometry;
pub mod popup;
pub mod registry;
pub mod service;
pub mod state_machine;
pub mod store;

pub use activation::{ActivationTracker, CursorSample, SampleSource};
pub use geometry::{PopupMetrics, PositionCalculator, ScreenSnapshot, TaskbarEdge};
pub use popup::{Popout, PopupAction, PopupController, PopupPlacement, PopupSlot, PopupState};
pub use registry::{ProxyWindow, ProxyWindowRegistry, SyncReport, Upsert, WindowState};
pub use service::{spawn_resync_timer, LoopControl, TaskbarService, UiMessage};
pub use state_machine::{ActivationOutcome, GuardState, ProxyWindowStateMachine};
pub use store::{GroupStore, JsonGroupStore, MemoryGroupStore};
