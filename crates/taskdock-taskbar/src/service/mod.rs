//! UI-thread owner of the whole taskbar layer.
//!
//! Everything that touches a native window runs here. Other threads talk
//! to the service only through [`UiMessage`].

mod dispatch;
mod timer;

#[cfg(test)]
mod tests;

pub use dispatch::{LoopControl, UiMessage};
pub use timer::spawn_resync_timer;

use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use taskdock_common::events::Event;
use taskdock_common::types::{GroupId, Size};
use taskdock_config::TaskdockConfig;
use taskdock_platform::{PlatformAdapter, PlatformEvent, WatchHandle};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::activation::{ActivationTracker, CursorSample};
use crate::geometry::{PopupMetrics, PositionCalculator, ScreenSnapshot};
use crate::popup::{Popout, PopupAction, PopupController};
use crate::registry::ProxyWindowRegistry;
use crate::state_machine::{ActivationOutcome, ProxyWindowStateMachine};
use crate::store::GroupStore;

pub struct TaskbarService {
    adapter: Rc<dyn PlatformAdapter>,
    store: Rc<dyn GroupStore>,
    registry: ProxyWindowRegistry,
    tracker: ActivationTracker,
    state_machine: ProxyWindowStateMachine,
    popup: PopupController,
    button: Size,
    platform_rx: Option<Receiver<PlatformEvent>>,
    watch: Option<WatchHandle>,
}

impl TaskbarService {
    pub fn new(
        adapter: Rc<dyn PlatformAdapter>,
        store: Rc<dyn GroupStore>,
        popout: Box<dyn Popout>,
        config: &TaskdockConfig,
    ) -> Self {
        let taskbar = &config.taskbar;
        let button = Size::new(
            f64::from(taskbar.button_width),
            f64::from(taskbar.button_height),
        );
        let calculator = PositionCalculator::new(PopupMetrics::from_config(&config.popup));
        Self {
            registry: ProxyWindowRegistry::new(adapter.clone(), taskbar.identity_prefix.clone()),
            tracker: ActivationTracker::new(Duration::from_millis(taskbar.sample_freshness_ms)),
            state_machine: ProxyWindowStateMachine::new(
                adapter.clone(),
                Duration::from_millis(taskbar.guard_interval_ms),
                button,
            ),
            popup: PopupController::new(adapter.clone(), store.clone(), popout, calculator),
            adapter,
            store,
            button,
            platform_rx: None,
            watch: None,
        }
    }

    /// Subscribe to the adapter's window events. Without this only group
    /// events and explicit calls reach the service.
    pub fn attach(&mut self) -> taskdock_platform::Result<()> {
        let (tx, rx) = mpsc::channel();
        self.watch = Some(self.adapter.watch_events(tx)?);
        self.platform_rx = Some(rx);
        Ok(())
    }

    /// Reconcile proxy windows with the store. A failed read keeps the
    /// current windows.
    pub fn resync(&mut self) {
        let groups = match self.store.groups() {
            Ok(groups) => groups,
            Err(e) => {
                warn!("group store unreadable, keeping current windows: {e}");
                return;
            }
        };
        self.registry.sync(&groups);

        let registry = &self.registry;
        self.tracker.retain(|h| registry.group_for(h).is_some());
        if let Some(active) = self.popup.active_group().cloned() {
            if !groups.iter().any(|g| g.id == active) {
                self.popup.close_group(&active);
            }
        }
    }

    pub fn handle(&mut self, message: UiMessage) -> LoopControl {
        match message {
            UiMessage::Group(event) => return self.handle_group_event(event),
            UiMessage::Platform(event) => self.handle_platform_event(event),
            UiMessage::Resync => self.resync(),
            UiMessage::PopoutClosed => self.popup.popout_closed(),
            UiMessage::Shutdown => return LoopControl::Exit,
        }
        LoopControl::Continue
    }

    fn handle_group_event(&mut self, event: Event) -> LoopControl {
        match event {
            Event::GroupCreated(group) | Event::GroupUpdated(group) => {
                if let Err(e) = self
                    .registry
                    .create_or_update(&group.id, &group.name, &group.icon)
                {
                    warn!(group = %group.id, "proxy window unavailable, will retry on resync: {e}");
                }
                if self.popup.active_group() == Some(&group.id) {
                    self.popup.refresh();
                }
            }
            Event::GroupDeleted(id) => {
                if let Some(handle) = self.registry.remove(&id) {
                    self.tracker.forget(handle);
                }
                self.popup.close_group(&id);
            }
            Event::StoreChanged => self.resync(),
            Event::Shutdown => return LoopControl::Exit,
            Event::Unknown => debug!("unknown group event ignored"),
        }
        LoopControl::Continue
    }

    fn handle_platform_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::Activated { window, cursor, at } => {
                if self.registry.group_for(window).is_some() {
                    self.tracker.record(window, cursor, at);
                }
            }
            PlatformEvent::Restored { window } => {
                let outcome = self.state_machine.on_restored(
                    window,
                    Instant::now(),
                    &mut self.registry,
                    &self.tracker,
                    &mut self.popup,
                );
                debug!(window = ?window, outcome = outcome_name(&outcome), "restore handled");
            }
            PlatformEvent::CloseRequested { window } => {
                // proxy windows only go away with their group
                if self.registry.group_for(window).is_some() {
                    info!(window = ?window, "close request on proxy window ignored");
                    if let Err(e) = self.adapter.minimize(window) {
                        warn!(window = ?window, "failed to re-minimize proxy window: {e}");
                    }
                }
            }
        }
    }

    /// Handle every platform event queued since the last pump.
    pub fn drain_platform_events(&mut self) {
        let Some(rx) = self.platform_rx.take() else {
            return;
        };
        while let Ok(event) = rx.try_recv() {
            self.handle_platform_event(event);
        }
        self.platform_rx = Some(rx);
    }

    /// Drain queued UI messages without blocking.
    pub fn drain_messages(&mut self, rx: &Receiver<UiMessage>) -> LoopControl {
        loop {
            match rx.try_recv() {
                Ok(message) => {
                    if self.handle(message) == LoopControl::Exit {
                        return LoopControl::Exit;
                    }
                }
                Err(TryRecvError::Empty) => return LoopControl::Continue,
                Err(TryRecvError::Disconnected) => {
                    warn!("UI message channel closed");
                    return LoopControl::Exit;
                }
            }
        }
    }

    /// Drain the group event bus. Missed events trigger a full resync.
    pub fn drain_group_events(&mut self, rx: &mut broadcast::Receiver<Event>) -> LoopControl {
        let mut lagged = false;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    if self.handle_group_event(event) == LoopControl::Exit {
                        return LoopControl::Exit;
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    warn!(missed, "group events dropped, resyncing");
                    lagged = true;
                }
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => break,
            }
        }
        if lagged {
            self.resync();
        }
        LoopControl::Continue
    }

    /// Open `group`'s popup at the current cursor, with no proxy window
    /// involved.
    pub fn open_group_at_cursor(&mut self, group: &GroupId) -> PopupAction {
        let anchor = match self.adapter.cursor_position() {
            Ok(position) => {
                let sample = CursorSample::immediate(position, Instant::now());
                ScreenSnapshot::query(self.adapter.as_ref())
                    .ok()
                    .map(|screen| screen.anchor_from(sample.position))
            }
            Err(e) => {
                warn!(group = %group, "cursor unavailable, centring popup: {e}");
                None
            }
        };
        self.popup.show_or_toggle(group, anchor, self.button)
    }

    pub fn show_general(&mut self) -> PopupAction {
        self.popup.show_general()
    }

    /// Close the popup and destroy every proxy window. Safe to call twice.
    pub fn shutdown(&mut self) {
        self.popup.close();
        let released = self.registry.remove_all();
        self.tracker.clear();
        self.platform_rx = None;
        self.watch = None;
        if !released.is_empty() {
            info!(windows = released.len(), "taskbar service stopped");
        }
    }

    pub fn registry(&self) -> &ProxyWindowRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &ActivationTracker {
        &self.tracker
    }

    pub fn popup(&self) -> &PopupController {
        &self.popup
    }
}

fn outcome_name(outcome: &ActivationOutcome) -> &'static str {
    match outcome {
        ActivationOutcome::UnknownWindow => "unknown-window",
        ActivationOutcome::Guarded => "guarded",
        ActivationOutcome::Handled(PopupAction::Opened(_)) => "opened",
        ActivationOutcome::Handled(PopupAction::Closed) => "closed",
        ActivationOutcome::Handled(PopupAction::Failed) => "failed",
    }
}
