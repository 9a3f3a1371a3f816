use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use taskdock_common::errors::PlatformError;
use taskdock_common::types::{GroupIcon, Point, Rect};

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Opaque native window handle. Only the platform crate interprets the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NativeHandle(pub u64);

/// Initial properties of a proxy window.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyWindowSpec {
    pub title: String,
    pub icon: GroupIcon,
}

/// Notifications raised by the OS message loop, delivered on the UI thread.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// A hooked window became active; `cursor` was sampled in the same
    /// message, in physical pixels.
    Activated {
        window: NativeHandle,
        cursor: Point,
        at: Instant,
    },
    /// A window left the minimized state.
    Restored { window: NativeHandle },
    /// The user asked to close a proxy window from the taskbar.
    CloseRequested { window: NativeHandle },
}

impl PlatformEvent {
    pub fn window(&self) -> NativeHandle {
        match self {
            PlatformEvent::Activated { window, .. }
            | PlatformEvent::Restored { window }
            | PlatformEvent::CloseRequested { window } => *window,
        }
    }
}

pub struct WatchHandle {
    _inner: Box<dyn std::any::Any>,
}

impl WatchHandle {
    pub fn new(inner: impl std::any::Any + 'static) -> Self {
        Self {
            _inner: Box::new(inner),
        }
    }
}

/// OS capability surface used by the taskbar core.
///
/// Rectangles and points are physical pixels. Every method must be called
/// from the thread that owns the message loop.
pub trait PlatformAdapter {
    /// Create a hidden proxy window.
    fn create_proxy_window(&self, spec: &ProxyWindowSpec) -> Result<NativeHandle>;
    fn destroy_window(&self, window: NativeHandle) -> Result<()>;
    /// Show the window minimized without activating it, giving it a taskbar button.
    fn show_minimized(&self, window: NativeHandle) -> Result<()>;
    fn minimize(&self, window: NativeHandle) -> Result<()>;
    fn set_title(&self, window: NativeHandle, title: &str) -> Result<()>;
    fn set_icon(&self, window: NativeHandle, icon: &GroupIcon) -> Result<()>;
    /// Give the window its own taskbar grouping identity.
    fn set_grouping_identity(&self, window: NativeHandle, identity: &str) -> Result<()>;
    fn install_activation_hook(&self, window: NativeHandle) -> Result<()>;
    fn remove_activation_hook(&self, window: NativeHandle) -> Result<()>;

    fn cursor_position(&self) -> Result<Point>;
    fn work_area(&self) -> Result<Rect>;
    fn screen_bounds(&self) -> Result<Rect>;
    /// Taskbar rectangle, `None` when no taskbar window can be found.
    fn taskbar_rect(&self) -> Result<Option<Rect>>;
    /// Physical pixels per DIP.
    fn dpi_scale(&self) -> Result<f64>;

    /// Route platform events into `sink` until the handle is dropped.
    fn watch_events(&self, sink: Sender<PlatformEvent>) -> Result<WatchHandle>;
    /// Dispatch pending OS messages, waiting at most `timeout` for one.
    /// Returns false once the OS asks the loop to quit.
    fn pump_messages(&self, timeout: Duration) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_handle_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(NativeHandle(1));
        set.insert(NativeHandle(2));
        set.insert(NativeHandle(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn native_handle_serialization() {
        let handle = NativeHandle(0x1234);
        let json = serde_json::to_string(&handle).unwrap();
        let back: NativeHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(handle, back);
    }

    #[test]
    fn event_window_accessor() {
        let at = Instant::now();
        let events = [
            PlatformEvent::Activated {
                window: NativeHandle(7),
                cursor: Point::new(1.0, 2.0),
                at,
            },
            PlatformEvent::Restored {
                window: NativeHandle(7),
            },
            PlatformEvent::CloseRequested {
                window: NativeHandle(7),
            },
        ];
        for event in &events {
            assert_eq!(event.window(), NativeHandle(7));
        }
    }

    #[test]
    fn watch_handle_creation() {
        let _handle = WatchHandle::new(42u32);
    }
}
