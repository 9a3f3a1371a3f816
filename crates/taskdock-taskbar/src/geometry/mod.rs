//! Pure popup geometry: taskbar edge detection, popup size, and placement.

mod edge;
mod height;
mod placement;
mod screen;


pub use edge::{taskbar_edge, TaskbarEdge};
pub use height::PopupMetrics;
pub use placement::popup_origin;
pub use screen::ScreenSnapshot;

use taskdock_common::types::{GroupId, Point, Rect, Size};

use crate::popup::PopupPlacement;

/// Turns an anchor and an item count into popup bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionCalculator {
    metrics: PopupMetrics,
}

impl PositionCalculator {
    pub fn new(metrics: PopupMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &PopupMetrics {
        &self.metrics
    }

    pub fn taskbar_edge(&self, work_area: &Rect, screen: &Rect) -> TaskbarEdge {
        taskbar_edge(work_area, screen)
    }

    pub fn popup_height(&self, item_count: usize) -> f64 {
        self.metrics.popup_height(item_count)
    }

    pub fn popup_size(&self, item_count: usize) -> Size {
        Size::new(self.metrics.width, self.popup_height(item_count))
    }

    pub fn popup_origin(
        &self,
        edge: TaskbarEdge,
        anchor: Option<Point>,
        size: Size,
        work_area: &Rect,
    ) -> Point {
        popup_origin(
            edge,
            anchor,
            size,
            work_area,
            self.metrics.margin,
            self.metrics.edge_spacing,
        )
    }

    /// Full placement for a popup showing `item_count` items.
    pub fn place(
        &self,
        group: Option<GroupId>,
        anchor: Option<Point>,
        button: Size,
        item_count: usize,
        screen: &ScreenSnapshot,
    ) -> PopupPlacement {
        let size = self.popup_size(item_count);
        let origin = self.popup_origin(screen.edge, anchor, size, &screen.work_area);
        PopupPlacement {
            group,
            anchor,
            button,
            bounds: Rect::new(origin.x, origin.y, size.width, size.height),
            edge: screen.edge,
        }
    }
}
