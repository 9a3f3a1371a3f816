//! No-op adapter for platforms without taskbar proxy windows.
//!
//! Queries report a nominal 1920x1080 desktop with a bottom taskbar so
//! placement still produces sensible output; window creation is refused.

use std::sync::mpsc::Sender;
use std::time::Duration;

use taskdock_common::errors::PlatformError;
use taskdock_common::types::{GroupIcon, Point, Rect};

use crate::adapter::{
    NativeHandle, PlatformAdapter, PlatformEvent, ProxyWindowSpec, Result, WatchHandle,
};

pub struct NoopAdapter;

impl PlatformAdapter for NoopAdapter {
    fn create_proxy_window(&self, _spec: &ProxyWindowSpec) -> Result<NativeHandle> {
        Err(PlatformError::NotSupported(format!(
            "taskbar proxy windows on {}",
            std::env::consts::OS
        )))
    }

    fn destroy_window(&self, _window: NativeHandle) -> Result<()> {
        Ok(())
    }

    fn show_minimized(&self, _window: NativeHandle) -> Result<()> {
        Ok(())
    }

    fn minimize(&self, _window: NativeHandle) -> Result<()> {
        Ok(())
    }

    fn set_title(&self, _window: NativeHandle, _title: &str) -> Result<()> {
        Ok(())
    }

    fn set_icon(&self, _window: NativeHandle, _icon: &GroupIcon) -> Result<()> {
        Ok(())
    }

    fn set_grouping_identity(&self, _window: NativeHandle, _identity: &str) -> Result<()> {
        Ok(())
    }

    fn install_activation_hook(&self, _window: NativeHandle) -> Result<()> {
        Ok(())
    }

    fn remove_activation_hook(&self, _window: NativeHandle) -> Result<()> {
        Ok(())
    }

    fn cursor_position(&self) -> Result<Point> {
        Err(PlatformError::NotSupported("cursor position".into()))
    }

    fn work_area(&self) -> Result<Rect> {
        Ok(Rect::new(0.0, 0.0, 1920.0, 1040.0))
    }

    fn screen_bounds(&self) -> Result<Rect> {
        Ok(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }

    fn taskbar_rect(&self) -> Result<Option<Rect>> {
        Ok(None)
    }

    fn dpi_scale(&self) -> Result<f64> {
        Ok(1.0)
    }

    fn watch_events(&self, _sink: Sender<PlatformEvent>) -> Result<WatchHandle> {
        Ok(WatchHandle::new(()))
    }

    fn pump_messages(&self, timeout: Duration) -> bool {
        std::thread::sleep(timeout);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_is_not_supported() {
        let adapter = NoopAdapter;
        let spec = ProxyWindowSpec {
            title: "Games".into(),
            icon: GroupIcon::default(),
        };
        assert!(matches!(
            adapter.create_proxy_window(&spec),
            Err(PlatformError::NotSupported(_))
        ));
    }

    #[test]
    fn queries_report_nominal_desktop() {
        let adapter = NoopAdapter;
        assert_eq!(adapter.screen_bounds().unwrap().height, 1080.0);
        assert_eq!(adapter.work_area().unwrap().height, 1040.0);
        assert!(adapter.taskbar_rect().unwrap().is_none());
        assert_eq!(adapter.dpi_scale().unwrap(), 1.0);
        assert!(adapter.cursor_position().is_err());
    }

    #[test]
    fn mutations_succeed() {
        let adapter = NoopAdapter;
        let w = NativeHandle(1);
        assert!(adapter.minimize(w).is_ok());
        assert!(adapter.set_title(w, "x").is_ok());
        assert!(adapter.destroy_window(w).is_ok());
    }

    #[test]
    fn pump_keeps_running() {
        assert!(NoopAdapter.pump_messages(Duration::from_millis(1)));
    }
}
