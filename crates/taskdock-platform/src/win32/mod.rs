//! Win32 proxy windows.
//!
//! Each proxy is a plain top-level window of the `TaskDockProxyWindow`
//! class, shown minimized so the shell gives it a taskbar button.

mod shell;
mod wndproc;

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::mpsc::Sender;
use std::sync::Once;
use std::time::Duration;

use taskdock_common::errors::PlatformError;
use taskdock_common::types::{GroupIcon, Point, Rect};
use tracing::{debug, warn};
use windows::core::{w, HSTRING, PCWSTR};
use windows::Win32::Foundation::{BOOL, HANDLE, HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    GetDpiForSystem, SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_SYSTEM_AWARE,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyIcon, DestroyWindow, DispatchMessageW, FindWindowW, GetCursorPos,
    GetSystemMetrics, GetWindowRect, LoadCursorW, LoadImageW, MsgWaitForMultipleObjects,
    PeekMessageW, RegisterClassW, SendMessageW, SetWindowTextW, ShowWindow,
    SystemParametersInfoW, TranslateMessage, HICON, ICON_BIG, ICON_SMALL, IDC_ARROW,
    IMAGE_ICON, LR_DEFAULTSIZE, LR_LOADFROMFILE, MSG, PM_REMOVE, QS_ALLINPUT, SM_CXSCREEN,
    SM_CYSCREEN, SPI_GETWORKAREA, SW_MINIMIZE, SW_SHOWMINNOACTIVE,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, WINDOW_EX_STYLE, WM_QUIT, WM_SETICON, WNDCLASSW,
    WS_CAPTION, WS_MINIMIZEBOX, WS_OVERLAPPED, WS_SYSMENU,
};

use crate::adapter::{
    NativeHandle, PlatformAdapter, PlatformEvent, ProxyWindowSpec, Result, WatchHandle,
};

static REGISTER_CLASS: Once = Once::new();

fn class_name() -> PCWSTR {
    w!("TaskDockProxyWindow")
}

fn to_hwnd(handle: NativeHandle) -> HWND {
    HWND(handle.0 as usize as *mut c_void)
}

fn to_handle(hwnd: HWND) -> NativeHandle {
    NativeHandle(hwnd.0 as usize as u64)
}

fn rect_from_win32(r: &RECT) -> Rect {
    Rect::from_edges(r.left as f64, r.top as f64, r.right as f64, r.bottom as f64)
}

fn op_err(what: &str, e: windows::core::Error) -> PlatformError {
    PlatformError::WindowOperation(format!("{what}: {e}"))
}

pub struct Win32Adapter {
    icons: RefCell<HashMap<NativeHandle, HICON>>,
}

impl Win32Adapter {
    /// Prepare the calling thread to own proxy windows.
    pub fn new() -> Result<Self> {
        unsafe {
            // Keeps cursor and rect queries in physical pixels.
            if let Err(e) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_SYSTEM_AWARE) {
                debug!("dpi awareness already set: {e}");
            }
            if let Err(e) = CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok() {
                warn!("COM initialisation failed, grouping identities may not apply: {e}");
            }
        }
        register_class()?;
        Ok(Self {
            icons: RefCell::new(HashMap::new()),
        })
    }

    fn release_icon(&self, window: NativeHandle) {
        if let Some(icon) = self.icons.borrow_mut().remove(&window) {
            unsafe {
                let _ = DestroyIcon(icon);
            }
        }
    }
}

fn register_class() -> Result<()> {
    let instance = unsafe { GetModuleHandleW(None) }
        .map_err(|e| PlatformError::WindowCreation(format!("GetModuleHandleW: {e}")))?;

    let mut result = Ok(());
    REGISTER_CLASS.call_once(|| unsafe {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc::proxy_wnd_proc),
            hInstance: instance.into(),
            lpszClassName: class_name(),
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            result = Err(PlatformError::WindowCreation(
                "RegisterClassW failed".into(),
            ));
        }
    });
    result
}

impl PlatformAdapter for Win32Adapter {
    fn create_proxy_window(&self, spec: &ProxyWindowSpec) -> Result<NativeHandle> {
        let hwnd = unsafe {
            let instance = GetModuleHandleW(None)
                .map_err(|e| PlatformError::WindowCreation(format!("GetModuleHandleW: {e}")))?;
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                class_name(),
                &HSTRING::from(spec.title.as_str()),
                WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX,
                -32000,
                -32000,
                160,
                40,
                None,
                None,
                instance,
                None,
            )
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?
        };
        let handle = to_handle(hwnd);
        if let Err(e) = self.set_icon(handle, &spec.icon) {
            debug!(window = ?handle, "initial icon not applied: {e}");
        }
        Ok(handle)
    }

    fn destroy_window(&self, window: NativeHandle) -> Result<()> {
        wndproc::forget(to_hwnd(window));
        let result = unsafe { DestroyWindow(to_hwnd(window)) }.map_err(|e| op_err("DestroyWindow", e));
        self.release_icon(window);
        result
    }

    fn show_minimized(&self, window: NativeHandle) -> Result<()> {
        unsafe {
            let _ = ShowWindow(to_hwnd(window), SW_SHOWMINNOACTIVE);
        }
        Ok(())
    }

    fn minimize(&self, window: NativeHandle) -> Result<()> {
        unsafe {
            let _ = ShowWindow(to_hwnd(window), SW_MINIMIZE);
        }
        Ok(())
    }

    fn set_title(&self, window: NativeHandle, title: &str) -> Result<()> {
        unsafe { SetWindowTextW(to_hwnd(window), &HSTRING::from(title)) }
            .map_err(|e| op_err("SetWindowTextW", e))
    }

    fn set_icon(&self, window: NativeHandle, icon: &GroupIcon) -> Result<()> {
        // Only .ico files are rendered; glyphs fall back to the class icon.
        let Some(path) = icon
            .path
            .as_deref()
            .filter(|p| p.to_ascii_lowercase().ends_with(".ico"))
        else {
            return Ok(());
        };

        let loaded: HANDLE = unsafe {
            LoadImageW(
                None,
                &HSTRING::from(path),
                IMAGE_ICON,
                0,
                0,
                LR_LOADFROMFILE | LR_DEFAULTSIZE,
            )
        }
        .map_err(|e| op_err("LoadImageW", e))?;

        let hicon = HICON(loaded.0);
        unsafe {
            let hwnd = to_hwnd(window);
            SendMessageW(hwnd, WM_SETICON, WPARAM(ICON_BIG as usize), LPARAM(hicon.0 as isize));
            SendMessageW(hwnd, WM_SETICON, WPARAM(ICON_SMALL as usize), LPARAM(hicon.0 as isize));
        }
        self.release_icon(window);
        self.icons.borrow_mut().insert(window, hicon);
        Ok(())
    }

    fn set_grouping_identity(&self, window: NativeHandle, identity: &str) -> Result<()> {
        shell::set_app_user_model_id(to_hwnd(window), identity)
            .map_err(|e| PlatformError::Identity(e.to_string()))
    }

    fn install_activation_hook(&self, window: NativeHandle) -> Result<()> {
        wndproc::hook(to_hwnd(window));
        Ok(())
    }

    fn remove_activation_hook(&self, window: NativeHandle) -> Result<()> {
        wndproc::unhook(to_hwnd(window));
        Ok(())
    }

    fn cursor_position(&self) -> Result<Point> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt) }.map_err(|e| PlatformError::Query(format!("GetCursorPos: {e}")))?;
        Ok(Point::new(pt.x as f64, pt.y as f64))
    }

    fn work_area(&self) -> Result<Rect> {
        let mut rect = RECT::default();
        unsafe {
            SystemParametersInfoW(
                SPI_GETWORKAREA,
                0,
                Some(&mut rect as *mut RECT as *mut c_void),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        }
        .map_err(|e| PlatformError::Query(format!("SPI_GETWORKAREA: {e}")))?;
        Ok(rect_from_win32(&rect))
    }

    fn screen_bounds(&self) -> Result<Rect> {
        let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        if w <= 0 || h <= 0 {
            return Err(PlatformError::Query("GetSystemMetrics returned 0".into()));
        }
        Ok(Rect::new(0.0, 0.0, w as f64, h as f64))
    }

    fn taskbar_rect(&self) -> Result<Option<Rect>> {
        let hwnd = match unsafe { FindWindowW(w!("Shell_TrayWnd"), PCWSTR::null()) } {
            Ok(hwnd) if !hwnd.is_invalid() => hwnd,
            _ => return Ok(None),
        };
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd, &mut rect) }
            .map_err(|e| PlatformError::Query(format!("GetWindowRect(Shell_TrayWnd): {e}")))?;
        Ok(Some(rect_from_win32(&rect)))
    }

    fn dpi_scale(&self) -> Result<f64> {
        let dpi = unsafe { GetDpiForSystem() };
        if dpi == 0 {
            return Err(PlatformError::Query("GetDpiForSystem returned 0".into()));
        }
        Ok(dpi as f64 / 96.0)
    }

    fn watch_events(&self, sink: Sender<PlatformEvent>) -> Result<WatchHandle> {
        wndproc::set_sink(Some(sink));
        Ok(WatchHandle::new(wndproc::SinkGuard))
    }

    fn pump_messages(&self, timeout: Duration) -> bool {
        let millis = timeout.as_millis().min(u32::MAX as u128) as u32;
        unsafe {
            let _ = MsgWaitForMultipleObjects(None, BOOL(0), millis, QS_ALLINPUT);
            let mut msg = MSG::default();
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                if msg.message == WM_QUIT {
                    return false;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        true
    }
}

impl Drop for Win32Adapter {
    fn drop(&mut self) {
        for (_, icon) in self.icons.borrow_mut().drain() {
            unsafe {
                let _ = DestroyIcon(icon);
            }
        }
    }
}
