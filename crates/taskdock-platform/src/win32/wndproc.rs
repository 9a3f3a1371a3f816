//! Window procedure shared by all proxy windows.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::mpsc::Sender;
use std::time::Instant;

use taskdock_common::types::Point;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, GetCursorPos, SIZE_MINIMIZED, WA_ACTIVE, WA_CLICKACTIVE, WM_ACTIVATE,
    WM_CLOSE, WM_SIZE,
};

use crate::adapter::{NativeHandle, PlatformEvent};

#[derive(Default)]
struct ProcState {
    sink: Option<Sender<PlatformEvent>>,
    hooked: HashSet<isize>,
    minimized: HashSet<isize>,
}

thread_local! {
    static STATE: RefCell<ProcState> = RefCell::new(ProcState::default());
}

/// Clears the event sink when the watch handle is dropped.
pub(super) struct SinkGuard;

impl Drop for SinkGuard {
    fn drop(&mut self) {
        set_sink(None);
    }
}

fn key(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

pub(super) fn set_sink(sink: Option<Sender<PlatformEvent>>) {
    STATE.with(|s| s.borrow_mut().sink = sink);
}

pub(super) fn hook(hwnd: HWND) {
    STATE.with(|s| s.borrow_mut().hooked.insert(key(hwnd)));
}

pub(super) fn unhook(hwnd: HWND) {
    STATE.with(|s| s.borrow_mut().hooked.remove(&key(hwnd)));
}

pub(super) fn forget(hwnd: HWND) {
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        s.hooked.remove(&key(hwnd));
        s.minimized.remove(&key(hwnd));
    });
}

fn emit(event: PlatformEvent) {
    STATE.with(|s| {
        if let Some(sink) = &s.borrow().sink {
            let _ = sink.send(event);
        }
    });
}

pub(super) unsafe extern "system" fn proxy_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let window = NativeHandle(hwnd.0 as usize as u64);
    match msg {
        WM_ACTIVATE => {
            let state = (wparam.0 & 0xFFFF) as u32;
            let hooked = STATE.with(|s| s.borrow().hooked.contains(&key(hwnd)));
            if hooked && (state == WA_ACTIVE || state == WA_CLICKACTIVE) {
                let mut pt = POINT::default();
                if GetCursorPos(&mut pt).is_ok() {
                    emit(PlatformEvent::Activated {
                        window,
                        cursor: Point::new(pt.x as f64, pt.y as f64),
                        at: Instant::now(),
                    });
                }
            }
        }
        WM_SIZE => {
            let minimized_now = wparam.0 as u32 == SIZE_MINIMIZED;
            let was_minimized = STATE.with(|s| {
                let mut s = s.borrow_mut();
                if minimized_now {
                    !s.minimized.insert(key(hwnd))
                } else {
                    s.minimized.remove(&key(hwnd))
                }
            });
            if !minimized_now && was_minimized {
                emit(PlatformEvent::Restored { window });
            }
        }
        WM_CLOSE => {
            // Proxy windows live as long as their group.
            emit(PlatformEvent::CloseRequested { window });
            return LRESULT(0);
        }
        _ => {}
    }
    DefWindowProcW(hwnd, msg, wparam, lparam)
}
