//! OS boundary for TaskDock: the `PlatformAdapter` trait with its Win32,
//! no-op and in-memory variants, plus platform directories and crash reports.

pub mod adapter;
pub mod crash_report;
pub mod fake;
pub mod noop;
pub mod paths;
#[cfg(target_os = "windows")]
pub mod win32;

pub use adapter::{
    NativeHandle, PlatformAdapter, PlatformEvent, ProxyWindowSpec, Result, WatchHandle,
};
pub use fake::{FakeAdapter, FakeWindow};
pub use noop::NoopAdapter;
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};

/// Create the adapter for the current OS.
///
/// On Windows: real proxy windows; falls back to no-op if the window class
/// cannot be registered. Elsewhere: no-op.
pub fn create_platform_adapter() -> Box<dyn PlatformAdapter> {
    #[cfg(target_os = "windows")]
    {
        match win32::Win32Adapter::new() {
            Ok(adapter) => Box::new(adapter),
            Err(e) => {
                tracing::error!("win32 adapter unavailable, taskbar buttons disabled: {e}");
                Box::new(NoopAdapter)
            }
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(NoopAdapter)
    }
}
