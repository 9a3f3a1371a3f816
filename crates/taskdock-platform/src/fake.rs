//! In-memory adapter for tests and headless runs.
//!
//! Records every window operation and lets callers script the desktop
//! geometry, the cursor, and individual failures.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use taskdock_common::errors::PlatformError;
use taskdock_common::types::{GroupIcon, Point, Rect};

use crate::adapter::{
    NativeHandle, PlatformAdapter, PlatformEvent, ProxyWindowSpec, Result, WatchHandle,
};

/// Snapshot of one fake window.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeWindow {
    pub handle: NativeHandle,
    pub title: String,
    pub icon: GroupIcon,
    pub identity: Option<String>,
    pub hooked: bool,
    pub shown: bool,
    pub minimize_count: usize,
}

#[derive(Debug)]
struct FakeState {
    next_handle: u64,
    windows: BTreeMap<NativeHandle, FakeWindow>,
    destroyed: Vec<NativeHandle>,
    cursor: Option<Point>,
    work_area: Rect,
    screen: Rect,
    taskbar: Option<Rect>,
    dpi: Option<f64>,
    fail_create: bool,
    fail_identity: bool,
    fail_hook: bool,
    fail_show: bool,
    sink: Option<Sender<PlatformEvent>>,
    quit: bool,
}

pub struct FakeAdapter {
    state: RefCell<FakeState>,
}

impl Default for FakeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeAdapter {
    /// 1920x1080 screen with a 40px bottom taskbar, cursor on the taskbar.
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FakeState {
                next_handle: 0x100,
                windows: BTreeMap::new(),
                destroyed: Vec::new(),
                cursor: Some(Point::new(960.0, 1060.0)),
                work_area: Rect::new(0.0, 0.0, 1920.0, 1040.0),
                screen: Rect::new(0.0, 0.0, 1920.0, 1080.0),
                taskbar: Some(Rect::new(0.0, 1040.0, 1920.0, 40.0)),
                dpi: Some(1.0),
                fail_create: false,
                fail_identity: false,
                fail_hook: false,
                fail_show: false,
                sink: None,
                quit: false,
            }),
        }
    }

    pub fn set_cursor(&self, cursor: Option<Point>) {
        self.state.borrow_mut().cursor = cursor;
    }

    pub fn set_work_area(&self, work_area: Rect) {
        self.state.borrow_mut().work_area = work_area;
    }

    pub fn set_screen(&self, screen: Rect) {
        self.state.borrow_mut().screen = screen;
    }

    pub fn set_taskbar(&self, taskbar: Option<Rect>) {
        self.state.borrow_mut().taskbar = taskbar;
    }

    /// `None` makes the DPI query fail.
    pub fn set_dpi(&self, dpi: Option<f64>) {
        self.state.borrow_mut().dpi = dpi;
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.borrow_mut().fail_create = fail;
    }

    pub fn fail_identity(&self, fail: bool) {
        self.state.borrow_mut().fail_identity = fail;
    }

    pub fn fail_hook(&self, fail: bool) {
        self.state.borrow_mut().fail_hook = fail;
    }

    pub fn fail_show(&self, fail: bool) {
        self.state.borrow_mut().fail_show = fail;
    }

    /// Make the next `pump_messages` report a quit request.
    pub fn request_quit(&self) {
        self.state.borrow_mut().quit = true;
    }

    pub fn window(&self, handle: NativeHandle) -> Option<FakeWindow> {
        self.state.borrow().windows.get(&handle).cloned()
    }

    /// Live windows in creation order.
    pub fn live_windows(&self) -> Vec<FakeWindow> {
        self.state.borrow().windows.values().cloned().collect()
    }

    pub fn window_titled(&self, title: &str) -> Option<FakeWindow> {
        self.state
            .borrow()
            .windows
            .values()
            .find(|w| w.title == title)
            .cloned()
    }

    pub fn destroyed(&self) -> Vec<NativeHandle> {
        self.state.borrow().destroyed.clone()
    }

    /// Deliver an event through the sink registered with `watch_events`.
    /// Returns false when nobody is watching.
    pub fn emit(&self, event: PlatformEvent) -> bool {
        match &self.state.borrow().sink {
            Some(sink) => sink.send(event).is_ok(),
            None => false,
        }
    }

    /// Simulate a taskbar click: a hook sample (if hooked) followed by the restore.
    pub fn click(&self, window: NativeHandle, cursor: Point) {
        let hooked = self.window(window).map(|w| w.hooked).unwrap_or(false);
        if hooked {
            self.emit(PlatformEvent::Activated {
                window,
                cursor,
                at: Instant::now(),
            });
        }
        self.emit(PlatformEvent::Restored { window });
    }

    fn with_window<T>(
        &self,
        window: NativeHandle,
        f: impl FnOnce(&mut FakeWindow) -> T,
    ) -> Result<T> {
        let mut state = self.state.borrow_mut();
        state
            .windows
            .get_mut(&window)
            .map(f)
            .ok_or_else(|| PlatformError::WindowOperation(format!("no window {window:?}")))
    }
}

impl PlatformAdapter for FakeAdapter {
    fn create_proxy_window(&self, spec: &ProxyWindowSpec) -> Result<NativeHandle> {
        let mut state = self.state.borrow_mut();
        if state.fail_create {
            return Err(PlatformError::WindowCreation("scripted failure".into()));
        }
        let handle = NativeHandle(state.next_handle);
        state.next_handle += 1;
        state.windows.insert(
            handle,
            FakeWindow {
                handle,
                title: spec.title.clone(),
                icon: spec.icon.clone(),
                identity: None,
                hooked: false,
                shown: false,
                minimize_count: 0,
            },
        );
        Ok(handle)
    }

    fn destroy_window(&self, window: NativeHandle) -> Result<()> {
        let mut state = self.state.borrow_mut();
        match state.windows.remove(&window) {
            Some(_) => {
                state.destroyed.push(window);
                Ok(())
            }
            None => Err(PlatformError::WindowOperation(format!(
                "no window {window:?}"
            ))),
        }
    }

    fn show_minimized(&self, window: NativeHandle) -> Result<()> {
        if self.state.borrow().fail_show {
            return Err(PlatformError::WindowOperation("scripted failure".into()));
        }
        self.with_window(window, |w| w.shown = true)
    }

    fn minimize(&self, window: NativeHandle) -> Result<()> {
        self.with_window(window, |w| w.minimize_count += 1)
    }

    fn set_title(&self, window: NativeHandle, title: &str) -> Result<()> {
        self.with_window(window, |w| w.title = title.to_string())
    }

    fn set_icon(&self, window: NativeHandle, icon: &GroupIcon) -> Result<()> {
        self.with_window(window, |w| w.icon = icon.clone())
    }

    fn set_grouping_identity(&self, window: NativeHandle, identity: &str) -> Result<()> {
        if self.state.borrow().fail_identity {
            return Err(PlatformError::Identity("scripted failure".into()));
        }
        self.with_window(window, |w| w.identity = Some(identity.to_string()))
    }

    fn install_activation_hook(&self, window: NativeHandle) -> Result<()> {
        if self.state.borrow().fail_hook {
            return Err(PlatformError::HookInstall("scripted failure".into()));
        }
        self.with_window(window, |w| w.hooked = true)
    }

    fn remove_activation_hook(&self, window: NativeHandle) -> Result<()> {
        self.with_window(window, |w| w.hooked = false)
    }

    fn cursor_position(&self) -> Result<Point> {
        self.state
            .borrow()
            .cursor
            .ok_or_else(|| PlatformError::Query("cursor unavailable".into()))
    }

    fn work_area(&self) -> Result<Rect> {
        Ok(self.state.borrow().work_area)
    }

    fn screen_bounds(&self) -> Result<Rect> {
        Ok(self.state.borrow().screen)
    }

    fn taskbar_rect(&self) -> Result<Option<Rect>> {
        Ok(self.state.borrow().taskbar)
    }

    fn dpi_scale(&self) -> Result<f64> {
        self.state
            .borrow()
            .dpi
            .ok_or_else(|| PlatformError::Query("dpi unavailable".into()))
    }

    fn watch_events(&self, sink: Sender<PlatformEvent>) -> Result<WatchHandle> {
        self.state.borrow_mut().sink = Some(sink);
        Ok(WatchHandle::new(()))
    }

    fn pump_messages(&self, _timeout: Duration) -> bool {
        !std::mem::take(&mut self.state.borrow_mut().quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn spec(title: &str) -> ProxyWindowSpec {
        ProxyWindowSpec {
            title: title.into(),
            icon: GroupIcon::default(),
        }
    }

    #[test]
    fn create_and_destroy() {
        let fake = FakeAdapter::new();
        let a = fake.create_proxy_window(&spec("A")).unwrap();
        let b = fake.create_proxy_window(&spec("B")).unwrap();
        assert_ne!(a, b);
        assert_eq!(fake.live_windows().len(), 2);

        fake.destroy_window(a).unwrap();
        assert_eq!(fake.live_windows().len(), 1);
        assert_eq!(fake.destroyed(), vec![a]);
        assert!(fake.destroy_window(a).is_err());
    }

    #[test]
    fn scripted_failures() {
        let fake = FakeAdapter::new();
        fake.fail_create(true);
        assert!(matches!(
            fake.create_proxy_window(&spec("A")),
            Err(PlatformError::WindowCreation(_))
        ));

        fake.fail_create(false);
        let w = fake.create_proxy_window(&spec("A")).unwrap();
        fake.fail_hook(true);
        assert!(fake.install_activation_hook(w).is_err());
        fake.fail_identity(true);
        assert!(fake.set_grouping_identity(w, "x").is_err());
    }

    #[test]
    fn dpi_and_cursor_can_fail() {
        let fake = FakeAdapter::new();
        fake.set_dpi(None);
        fake.set_cursor(None);
        assert!(fake.dpi_scale().is_err());
        assert!(fake.cursor_position().is_err());
    }

    #[test]
    fn click_emits_hook_sample_only_when_hooked() {
        let fake = FakeAdapter::new();
        let (tx, rx) = mpsc::channel();
        let _watch = fake.watch_events(tx).unwrap();
        let w = fake.create_proxy_window(&spec("A")).unwrap();

        fake.click(w, Point::new(100.0, 1060.0));
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], PlatformEvent::Restored { .. }));

        fake.install_activation_hook(w).unwrap();
        fake.click(w, Point::new(100.0, 1060.0));
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(
            matches!(events[0], PlatformEvent::Activated { cursor, .. } if cursor.x == 100.0)
        );
    }

    #[test]
    fn quit_is_reported_once() {
        let fake = FakeAdapter::new();
        assert!(fake.pump_messages(Duration::ZERO));
        fake.request_quit();
        assert!(!fake.pump_messages(Duration::ZERO));
        assert!(fake.pump_messages(Duration::ZERO));
    }
}
