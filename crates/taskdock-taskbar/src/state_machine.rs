//! Turns a proxy window restore into a popup toggle.
//!
//! A click on a group's taskbar button restores its minimized proxy window.
//! The window is pushed straight back to the taskbar and the popup is shown
//! next to where the click landed. Closing the popup hands focus back to the
//! proxy window, which looks exactly like another click; the guard window
//! filters those out.

use std::rc::Rc;
use std::time::{Duration, Instant};

use taskdock_common::id::new_correlation_id;
use taskdock_common::types::{Point, Size};
use taskdock_platform::{NativeHandle, PlatformAdapter};
use tracing::{debug, info, warn};

use crate::activation::{ActivationTracker, CursorSample};
use crate::geometry::ScreenSnapshot;
use crate::popup::{PopupAction, PopupController};
use crate::registry::{ProxyWindowRegistry, WindowState};

/// When a popup was last shown in response to an activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardState {
    last_shown_at: Option<Instant>,
}

impl GuardState {
    pub fn last_shown_at(&self) -> Option<Instant> {
        self.last_shown_at
    }

    /// True while `now` falls inside the guard window.
    pub fn blocks(&self, now: Instant, interval: Duration) -> bool {
        self.last_shown_at
            .is_some_and(|shown| now.saturating_duration_since(shown) < interval)
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_shown_at = Some(now);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivationOutcome {
    /// No live proxy window has this handle (group deleted mid-activation).
    UnknownWindow,
    /// Inside the guard window; treated as focus returning from the popup.
    Guarded,
    Handled(PopupAction),
}

pub struct ProxyWindowStateMachine {
    adapter: Rc<dyn PlatformAdapter>,
    guard: GuardState,
    guard_interval: Duration,
    button: Size,
}

impl ProxyWindowStateMachine {
    pub fn new(adapter: Rc<dyn PlatformAdapter>, guard_interval: Duration, button: Size) -> Self {
        Self {
            adapter,
            guard: GuardState::default(),
            guard_interval,
            button,
        }
    }

    pub fn guard(&self) -> &GuardState {
        &self.guard
    }

    pub fn guard_interval(&self) -> Duration {
        self.guard_interval
    }

    /// Handle a proxy window leaving the minimized state at `now`.
    pub fn on_restored(
        &mut self,
        window: NativeHandle,
        now: Instant,
        registry: &mut ProxyWindowRegistry,
        tracker: &ActivationTracker,
        popup: &mut PopupController,
    ) -> ActivationOutcome {
        let Some(group) = registry.group_for(window).cloned() else {
            debug!(window = ?window, "restore for unknown window ignored");
            return ActivationOutcome::UnknownWindow;
        };
        let activation = new_correlation_id();
        registry.set_state(window, WindowState::Activating);

        let immediate = match self.adapter.cursor_position() {
            Ok(position) => Some(CursorSample::immediate(position, now)),
            Err(e) => {
                debug!(activation = %activation, "immediate cursor sample failed: {e}");
                None
            }
        };
        let sample = tracker.resolve(window, immediate, now);

        if self.guard.blocks(now, self.guard_interval) {
            debug!(activation = %activation, group = %group, "activation inside guard window ignored");
            self.park(window, registry);
            return ActivationOutcome::Guarded;
        }

        let anchor = sample.and_then(|s| self.anchor_for(&s));
        debug!(
            activation = %activation,
            group = %group,
            source = ?sample.map(|s| s.source),
            anchor = ?anchor,
            "activation"
        );
        let action = popup.show_or_toggle(&group, anchor, self.button);

        self.park(window, registry);
        self.guard.mark(now);

        info!(activation = %activation, group = %group, action = action_name(&action), "group button clicked");
        ActivationOutcome::Handled(action)
    }

    fn anchor_for(&self, sample: &CursorSample) -> Option<Point> {
        match ScreenSnapshot::query(self.adapter.as_ref()) {
            Ok(screen) => Some(screen.anchor_from(sample.position)),
            Err(e) => {
                warn!(source = ?sample.source, "no screen geometry for anchor, centring popup: {e}");
                None
            }
        }
    }

    /// Back to the taskbar. The proxy window must never stay restored.
    fn park(&self, window: NativeHandle, registry: &mut ProxyWindowRegistry) {
        if let Err(e) = self.adapter.minimize(window) {
            warn!(window = ?window, "failed to re-minimize proxy window: {e}");
        }
        registry.set_state(window, WindowState::Idle);
    }
}

fn action_name(action: &PopupAction) -> &'static str {
    match action {
        PopupAction::Opened(_) => "opened",
        PopupAction::Closed => "closed",
        PopupAction::Failed => "failed",
    }
}
