use windows::core::{BSTR, PROPVARIANT};
use windows::Win32::Foundation::HWND;
use windows::Win32::Storage::EnhancedStorage::PKEY_AppUserModel_ID;
use windows::Win32::UI::Shell::PropertiesSystem::{IPropertyStore, SHGetPropertyStoreForWindow};

/// Assign the window its own AppUserModelID so the shell does not merge its
/// taskbar button with the application's.
pub(super) fn set_app_user_model_id(hwnd: HWND, id: &str) -> windows::core::Result<()> {
    unsafe {
        let store: IPropertyStore = SHGetPropertyStoreForWindow(hwnd)?;
        let value = PROPVARIANT::from(BSTR::from(id));
        store.SetValue(&PKEY_AppUserModel_ID, &value)?;
        store.Commit()
    }
}
