//! `--group <id>` mode: show one group's popup at the cursor, then exit.
//!
//! A pinned group shortcut starts the binary this way. No proxy windows
//! are created.

use std::time::Duration;

use taskdock_common::types::GroupId;
use taskdock_taskbar::{LoopControl, PopupAction};

use super::core::{TaskdockApp, PUMP_INTERVAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    UnknownGroup,
    StoreUnavailable,
    /// The popup could not be placed or rendered.
    NotShown,
    /// The popup closed.
    Dismissed,
    /// Ctrl-C or an OS quit arrived while the popup was open.
    Interrupted,
}

impl TaskdockApp {
    pub fn run_launch(&mut self, group: &GroupId) -> LaunchOutcome {
        self.start_background(false);
        let outcome = self.launch(group, PUMP_INTERVAL);
        self.shutdown();
        outcome
    }

    pub(super) fn launch(&mut self, group: &GroupId, timeout: Duration) -> LaunchOutcome {
        match self.store.contains(group) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("No group with id {group}");
                return LaunchOutcome::UnknownGroup;
            }
            Err(e) => {
                tracing::warn!("Group store unreadable: {e}");
                return LaunchOutcome::StoreUnavailable;
            }
        }

        if !matches!(
            self.service.open_group_at_cursor(group),
            PopupAction::Opened(_)
        ) {
            return LaunchOutcome::NotShown;
        }

        loop {
            if self.tick(timeout) == LoopControl::Exit {
                return LaunchOutcome::Interrupted;
            }
            if !self.service.popup().is_visible() {
                return LaunchOutcome::Dismissed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use taskdock_common::types::{GroupId, Point};
    use taskdock_taskbar::UiMessage;

    use super::*;
    use crate::app_state::core::test_support::app;

    #[test]
    fn unknown_group_exits_immediately() {
        let (fake, _store, mut app) = app();
        assert_eq!(
            app.launch(&GroupId::from("nope"), Duration::ZERO),
            LaunchOutcome::UnknownGroup
        );
        assert!(fake.live_windows().is_empty());
    }

    #[test]
    fn store_failure_is_reported() {
        let (_fake, store, mut app) = app();
        store.fail_reads(true);
        assert_eq!(
            app.launch(&GroupId::from("work"), Duration::ZERO),
            LaunchOutcome::StoreUnavailable
        );
    }

    #[test]
    fn popup_close_ends_launch() {
        let (fake, _store, mut app) = app();
        fake.set_cursor(Some(Point::new(200.0, 1060.0)));
        app.ui_sender().send(UiMessage::PopoutClosed).unwrap();

        assert_eq!(
            app.launch(&GroupId::from("games"), Duration::ZERO),
            LaunchOutcome::Dismissed
        );
        assert!(fake.live_windows().is_empty());
    }

    #[test]
    fn shutdown_request_interrupts_launch() {
        let (_fake, _store, mut app) = app();
        app.ui_sender().send(UiMessage::Shutdown).unwrap();
        assert_eq!(
            app.launch(&GroupId::from("work"), Duration::ZERO),
            LaunchOutcome::Interrupted
        );
    }
}
