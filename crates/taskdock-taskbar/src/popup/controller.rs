use std::rc::Rc;

use taskdock_common::types::{GroupId, Point, Size};
use taskdock_platform::PlatformAdapter;
use tracing::{debug, info, warn};

use crate::geometry::{PositionCalculator, ScreenSnapshot};
use crate::store::GroupStore;

use super::{Popout, PopupAction, PopupSlot, PopupState};

/// Owns the one popup that may be visible at a time.
pub struct PopupController {
    adapter: Rc<dyn PlatformAdapter>,
    store: Rc<dyn GroupStore>,
    popout: Box<dyn Popout>,
    calculator: PositionCalculator,
    state: PopupState,
}

impl PopupController {
    pub fn new(
        adapter: Rc<dyn PlatformAdapter>,
        store: Rc<dyn GroupStore>,
        popout: Box<dyn Popout>,
        calculator: PositionCalculator,
    ) -> Self {
        Self {
            adapter,
            store,
            popout,
            calculator,
            state: PopupState::hidden(),
        }
    }

    /// Open `group`'s popup at `anchor` (DIPs). Toggles closed if it is
    /// already showing; replaces any other popup.
    pub fn show_or_toggle(
        &mut self,
        group: &GroupId,
        anchor: Option<Point>,
        button: Size,
    ) -> PopupAction {
        self.toggle(PopupSlot::Group(group.clone()), anchor, button)
    }

    /// Open the non-group popup centred in the work area.
    pub fn show_general(&mut self) -> PopupAction {
        self.toggle(PopupSlot::General, None, Size::default())
    }

    fn toggle(&mut self, slot: PopupSlot, anchor: Option<Point>, button: Size) -> PopupAction {
        if self.state.active.as_ref() == Some(&slot) {
            debug!(slot = ?slot, "popup toggled closed");
            self.close();
            return PopupAction::Closed;
        }
        if self.state.visible {
            self.close();
        }
        self.open(slot, anchor, button)
    }

    fn open(&mut self, slot: PopupSlot, anchor: Option<Point>, button: Size) -> PopupAction {
        let item_count = self.fresh_count(&slot);

        let screen = match ScreenSnapshot::query(self.adapter.as_ref()) {
            Ok(screen) => screen,
            Err(e) => {
                warn!(slot = ?slot, "cannot place popup without screen geometry: {e}");
                return PopupAction::Failed;
            }
        };

        let placement =
            self.calculator
                .place(slot.group().cloned(), anchor, button, item_count, &screen);
        if let Err(e) = self.popout.open(&placement) {
            warn!(slot = ?slot, "popout failed to open: {e}");
            return PopupAction::Failed;
        }

        info!(
            slot = ?slot,
            items = item_count,
            x = placement.bounds.x,
            y = placement.bounds.y,
            height = placement.bounds.height,
            "popup opened"
        );
        self.state = PopupState::shown(slot, placement.bounds);
        PopupAction::Opened(placement)
    }

    fn fresh_count(&self, slot: &PopupSlot) -> usize {
        let count = match slot {
            PopupSlot::Group(id) => self.store.fresh_item_count(id),
            PopupSlot::General => self.store.groups().map(|groups| groups.len()),
        };
        count.unwrap_or_else(|e| {
            warn!(slot = ?slot, "item count unavailable, sizing for empty popup: {e}");
            0
        })
    }

    /// Hide whatever is showing.
    pub fn close(&mut self) {
        if self.state.visible {
            self.popout.close();
            debug!(slot = ?self.state.active, "popup closed");
        }
        self.state = PopupState::hidden();
    }

    /// Close only if `group`'s popup is the one showing.
    pub fn close_group(&mut self, group: &GroupId) -> bool {
        if self.active_group() == Some(group) {
            self.close();
            true
        } else {
            false
        }
    }

    /// The renderer closed itself; forget the popup without calling back.
    pub fn popout_closed(&mut self) {
        if self.state.visible {
            debug!(slot = ?self.state.active, "popout closed by renderer");
        }
        self.state = PopupState::hidden();
    }

    pub fn refresh(&mut self) {
        if self.state.visible {
            self.popout.refresh();
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn active_slot(&self) -> Option<&PopupSlot> {
        self.state.active.as_ref()
    }

    pub fn active_group(&self) -> Option<&GroupId> {
        self.state.active.as_ref().and_then(PopupSlot::group)
    }
}
