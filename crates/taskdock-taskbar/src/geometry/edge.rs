use serde::{Deserialize, Serialize};
use taskdock_common::types::Rect;

/// Screen side occupied by the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskbarEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl TaskbarEdge {
    /// Bottom and Top taskbars lay buttons out horizontally.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, TaskbarEdge::Top | TaskbarEdge::Bottom)
    }
}

/// Derive the taskbar edge from the gap between work area and screen.
///
/// The largest margin wins; ties resolve Bottom, Top, Left, Right, and a
/// work area covering the whole screen (auto-hide) reports Bottom.
pub fn taskbar_edge(work_area: &Rect, screen: &Rect) -> TaskbarEdge {
    let margins = [
        (TaskbarEdge::Bottom, screen.bottom() - work_area.bottom()),
        (TaskbarEdge::Top, work_area.top() - screen.top()),
        (TaskbarEdge::Left, work_area.left() - screen.left()),
        (TaskbarEdge::Right, screen.right() - work_area.right()),
    ];

    let mut best = (TaskbarEdge::Bottom, 0.0);
    for (edge, margin) in margins {
        if margin > best.1 {
            best = (edge, margin);
        }
    }
    best.0
}
