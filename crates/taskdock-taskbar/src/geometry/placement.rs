use taskdock_common::types::{Point, Rect, Size};

use super::edge::TaskbarEdge;

/// Clamp `value` into `[min, max]`, pinning to `min` when the span is too small.
fn clamp_span(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Top-left corner of a popup of `size` next to `anchor` on a taskbar at `edge`.
///
/// Along the taskbar the popup is centred on the anchor and kept `margin`
/// inside the work area; across it the popup sits `edge_spacing` away from
/// the anchor and is kept inside the work area. Without an anchor the popup
/// is centred in the work area, `margin` inside on both axes.
pub fn popup_origin(
    edge: TaskbarEdge,
    anchor: Option<Point>,
    size: Size,
    work_area: &Rect,
    margin: f64,
    edge_spacing: f64,
) -> Point {
    let min_x_margin = work_area.left() + margin;
    let max_x_margin = work_area.right() - margin - size.width;
    let min_y_margin = work_area.top() + margin;
    let max_y_margin = work_area.bottom() - margin - size.height;

    let Some(anchor) = anchor else {
        let x = work_area.x + (work_area.width - size.width) / 2.0;
        let y = work_area.y + (work_area.height - size.height) / 2.0;
        return Point::new(
            clamp_span(x, min_x_margin, max_x_margin),
            clamp_span(y, min_y_margin, max_y_margin),
        );
    };

    let min_x = work_area.left();
    let max_x = work_area.right() - size.width;
    let min_y = work_area.top();
    let max_y = work_area.bottom() - size.height;

    match edge {
        TaskbarEdge::Bottom | TaskbarEdge::Top => {
            let x = anchor.x - size.width / 2.0;
            let y = if edge == TaskbarEdge::Bottom {
                anchor.y - size.height - edge_spacing
            } else {
                anchor.y + edge_spacing
            };
            Point::new(
                clamp_span(x, min_x_margin, max_x_margin),
                clamp_span(y, min_y, max_y),
            )
        }
        TaskbarEdge::Left | TaskbarEdge::Right => {
            let y = anchor.y - size.height / 2.0;
            let x = if edge == TaskbarEdge::Left {
                anchor.x + edge_spacing
            } else {
                anchor.x - size.width - edge_spacing
            };
            Point::new(
                clamp_span(x, min_x, max_x),
                clamp_span(y, min_y_margin, max_y_margin),
            )
        }
    }
}
