//! One minimized native window per group, giving each group its own
//! taskbar button.

mod sync;
mod types;


pub use types::{ProxyWindow, SyncReport, Upsert, WindowState};

use std::collections::HashMap;
use std::rc::Rc;

use taskdock_common::types::{GroupIcon, GroupId};
use taskdock_platform::{NativeHandle, PlatformAdapter, ProxyWindowSpec, Result};
use tracing::{debug, info, warn};

pub struct ProxyWindowRegistry {
    adapter: Rc<dyn PlatformAdapter>,
    identity_prefix: String,
    windows: HashMap<GroupId, ProxyWindow>,
    by_handle: HashMap<NativeHandle, GroupId>,
}

impl ProxyWindowRegistry {
    pub fn new(adapter: Rc<dyn PlatformAdapter>, identity_prefix: impl Into<String>) -> Self {
        Self {
            adapter,
            identity_prefix: identity_prefix.into(),
            windows: HashMap::new(),
            by_handle: HashMap::new(),
        }
    }

    /// Taskbar grouping identity for a group's window.
    pub fn identity_for(&self, group_id: &GroupId) -> String {
        format!("{}.{}", self.identity_prefix, group_id)
    }

    /// Create the group's window on first call; afterwards update title and
    /// icon when they changed.
    pub fn create_or_update(
        &mut self,
        group_id: &GroupId,
        title: &str,
        icon: &GroupIcon,
    ) -> Result<Upsert> {
        if let Some(window) = self.windows.get_mut(group_id) {
            let mut changed = false;
            if window.title != title {
                self.adapter.set_title(window.handle, title)?;
                window.title = title.to_string();
                changed = true;
            }
            if window.icon != *icon {
                if let Err(e) = self.adapter.set_icon(window.handle, icon) {
                    warn!(group = %group_id, "icon update failed: {e}");
                }
                window.icon = icon.clone();
                changed = true;
            }
            return Ok(if changed {
                debug!(group = %group_id, "proxy window updated");
                Upsert::Updated
            } else {
                Upsert::Unchanged
            });
        }

        let window = self.create_window(group_id, title, icon)?;
        let handle = window.handle;
        self.by_handle.insert(handle, group_id.clone());
        self.windows.insert(group_id.clone(), window);
        Ok(Upsert::Created(handle))
    }

    /// Create hidden, assign identity, hook activation, then show minimized.
    fn create_window(
        &self,
        group_id: &GroupId,
        title: &str,
        icon: &GroupIcon,
    ) -> Result<ProxyWindow> {
        let spec = ProxyWindowSpec {
            title: title.to_string(),
            icon: icon.clone(),
        };
        let handle = self.adapter.create_proxy_window(&spec)?;

        let identity = self.identity_for(group_id);
        if let Err(e) = self.adapter.set_grouping_identity(handle, &identity) {
            warn!(group = %group_id, "grouping identity not applied, button may merge with the app: {e}");
        }

        let hooked = match self.adapter.install_activation_hook(handle) {
            Ok(()) => true,
            Err(e) => {
                warn!(group = %group_id, "activation hook unavailable, using immediate cursor samples: {e}");
                false
            }
        };

        if let Err(e) = self.adapter.show_minimized(handle) {
            if hooked {
                if let Err(err) = self.adapter.remove_activation_hook(handle) {
                    debug!(group = %group_id, "hook removal failed: {err}");
                }
            }
            if let Err(err) = self.adapter.destroy_window(handle) {
                warn!(group = %group_id, window = ?handle, "proxy window leaked after show failure: {err}");
            }
            return Err(e);
        }

        info!(group = %group_id, window = ?handle, "proxy window created");
        Ok(ProxyWindow {
            group_id: group_id.clone(),
            handle,
            title: title.to_string(),
            icon: icon.clone(),
            state: WindowState::Idle,
            hooked,
        })
    }

    /// Destroy the group's window. Returns its handle, or `None` if the
    /// group had no window.
    pub fn remove(&mut self, group_id: &GroupId) -> Option<NativeHandle> {
        let window = self.windows.remove(group_id)?;
        self.by_handle.remove(&window.handle);
        self.teardown(&window);
        Some(window.handle)
    }

    /// Destroy every window. Returns the released handles.
    pub fn remove_all(&mut self) -> Vec<NativeHandle> {
        let ids: Vec<GroupId> = self.windows.keys().cloned().collect();
        ids.iter().filter_map(|id| self.remove(id)).collect()
    }

    fn teardown(&self, window: &ProxyWindow) {
        if window.hooked {
            if let Err(e) = self.adapter.remove_activation_hook(window.handle) {
                debug!(group = %window.group_id, "hook removal failed: {e}");
            }
        }
        match self.adapter.destroy_window(window.handle) {
            Ok(()) => info!(group = %window.group_id, "proxy window destroyed"),
            Err(e) => warn!(group = %window.group_id, "proxy window destroy failed: {e}"),
        }
    }

    pub fn group_for(&self, handle: NativeHandle) -> Option<&GroupId> {
        self.by_handle.get(&handle)
    }

    pub fn get(&self, group_id: &GroupId) -> Option<&ProxyWindow> {
        self.windows.get(group_id)
    }

    pub fn set_state(&mut self, handle: NativeHandle, state: WindowState) {
        if let Some(window) = self
            .by_handle
            .get(&handle)
            .and_then(|id| self.windows.get_mut(id))
        {
            window.state = state;
        }
    }

    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self.windows.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
