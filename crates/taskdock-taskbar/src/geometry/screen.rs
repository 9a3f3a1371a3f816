use taskdock_common::types::{Point, Rect};
use taskdock_platform::{PlatformAdapter, Result};
use tracing::{debug, warn};

use super::edge::{taskbar_edge, TaskbarEdge};

/// Desktop geometry in DIPs, queried fresh for every placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSnapshot {
    pub work_area: Rect,
    pub screen_bounds: Rect,
    pub taskbar: Option<Rect>,
    pub dpi_scale: f64,
    pub edge: TaskbarEdge,
}

impl ScreenSnapshot {
    /// Build a snapshot from physical-pixel measurements.
    pub fn from_physical(
        work_area: Rect,
        screen_bounds: Rect,
        taskbar: Option<Rect>,
        dpi_scale: f64,
    ) -> Self {
        let dpi_scale = if dpi_scale.is_finite() && dpi_scale > 0.0 {
            dpi_scale
        } else {
            1.0
        };
        let work_area = work_area.unscaled(dpi_scale);
        let screen_bounds = screen_bounds.unscaled(dpi_scale);
        Self {
            edge: taskbar_edge(&work_area, &screen_bounds),
            work_area,
            screen_bounds,
            taskbar: taskbar.map(|t| t.unscaled(dpi_scale)),
            dpi_scale,
        }
    }

    /// Query the adapter. DPI and taskbar failures degrade to 1.0 and `None`.
    pub fn query(adapter: &dyn PlatformAdapter) -> Result<Self> {
        let work_area = adapter.work_area()?;
        let screen_bounds = adapter.screen_bounds()?;
        let dpi_scale = adapter.dpi_scale().unwrap_or_else(|e| {
            warn!("dpi query failed, assuming 1.0: {e}");
            1.0
        });
        let taskbar = adapter.taskbar_rect().unwrap_or_else(|e| {
            debug!("taskbar rect unavailable: {e}");
            None
        });
        Ok(Self::from_physical(work_area, screen_bounds, taskbar, dpi_scale))
    }

    /// Convert a physical cursor sample to DIPs and snap it onto the inner
    /// edge of the taskbar when its rectangle is known.
    pub fn anchor_from(&self, physical: Point) -> Point {
        let mut anchor = physical.unscaled(self.dpi_scale);
        if let Some(taskbar) = self.taskbar {
            match self.edge {
                TaskbarEdge::Bottom => anchor.y = taskbar.top(),
                TaskbarEdge::Top => anchor.y = taskbar.bottom(),
                TaskbarEdge::Left => anchor.x = taskbar.right(),
                TaskbarEdge::Right => anchor.x = taskbar.left(),
            }
        }
        anchor
    }
}
