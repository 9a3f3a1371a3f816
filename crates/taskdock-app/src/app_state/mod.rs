//! Top-level application state.
//!
//! Owns the taskbar service and the channels feeding it, and drives the
//! UI-thread message loop.

mod background;
mod core;
mod launch;
mod popout;
mod shutdown;

pub use core::TaskdockApp;
pub use launch::LaunchOutcome;
pub use popout::LogPopout;
