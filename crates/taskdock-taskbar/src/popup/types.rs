use serde::Serialize;
use taskdock_common::types::{GroupId, Point, Rect, Size};

use crate::geometry::TaskbarEdge;

/// Everything the renderer needs to draw a popup, in DIPs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupPlacement {
    /// `None` for the general popup.
    pub group: Option<GroupId>,
    pub anchor: Option<Point>,
    /// Nominal size of the taskbar button the popup belongs to.
    pub button: Size,
    pub bounds: Rect,
    pub edge: TaskbarEdge,
}

/// Which popup is showing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PopupSlot {
    General,
    Group(GroupId),
}

impl PopupSlot {
    pub fn group(&self) -> Option<&GroupId> {
        match self {
            PopupSlot::General => None,
            PopupSlot::Group(id) => Some(id),
        }
    }
}

/// The single popup's state. `visible` holds exactly when `active` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupState {
    pub visible: bool,
    pub active: Option<PopupSlot>,
    pub geometry: Option<Rect>,
}

impl PopupState {
    pub fn shown(slot: PopupSlot, geometry: Rect) -> Self {
        Self {
            visible: true,
            active: Some(slot),
            geometry: Some(geometry),
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }
}

/// What a show request ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    Opened(PopupPlacement),
    /// The same popup was already open and got toggled closed.
    Closed,
    /// Nothing is showing because geometry or rendering failed.
    Failed,
}
