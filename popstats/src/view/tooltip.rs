//! Tooltip placement relative to the chart container.

use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

/// Default gap between the pointer and the bottom edge of the tooltip.
pub const TOOLTIP_OFFSET_PX: f64 = 10.0;

/// A bounding client rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Horizontal center in client coordinates.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Tooltip position in the chart's own coordinate frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TooltipPosition {
    pub top: f64,
    pub left: f64,
}

/// Place a `width` x `height` tooltip above the pointer, centered on `element`.
///
/// Returns the origin when the chart container could not be found.
pub fn tooltip_position(
    element: &Rect,
    chart: Option<&Rect>,
    width: f64,
    height: f64,
    pointer_y: f64,
    offset: f64,
) -> TooltipPosition {
    let Some(chart) = chart else {
        return TooltipPosition::default();
    };

    TooltipPosition {
        top: pointer_y - chart.top - height - offset,
        left: element.center_x() - chart.left - width / 2.0,
    }
}

/// Tooltip position callback bound to a live pointer-Y cell.
///
/// The charting library invokes the callback without the pointer event, so
/// the last observed pointer Y is read from the shared cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPositioner {
    pointer_y: Rc<Cell<f64>>,
    offset: f64,
}

impl TooltipPositioner {
    pub fn new(pointer_y: Rc<Cell<f64>>, offset: f64) -> Self {
        Self { pointer_y, offset }
    }

    pub fn position(
        &self,
        element: &Rect,
        chart: Option<&Rect>,
        width: f64,
        height: f64,
    ) -> TooltipPosition {
        tooltip_position(element, chart, width, height, self.pointer_y.get(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_above_pointer() {
        let element = Rect::new(120.0, 300.0, 20.0, 100.0);
        let chart = Rect::new(100.0, 250.0, 320.0, 218.0);

        let pos = tooltip_position(&element, Some(&chart), 40.0, 24.0, 330.0, TOOLTIP_OFFSET_PX);

        // center 130 - chart 100 - half width 20
        assert_eq!(pos.left, 10.0);
        // 330 - 250 - 24 - 10
        assert_eq!(pos.top, 46.0);
    }

    #[test]
    fn test_missing_chart_is_origin() {
        let element = Rect::new(120.0, 300.0, 20.0, 100.0);
        let pos = tooltip_position(&element, None, 40.0, 24.0, 330.0, TOOLTIP_OFFSET_PX);
        assert_eq!(pos, TooltipPosition { top: 0.0, left: 0.0 });
    }

    #[test]
    fn test_may_go_negative_near_edges() {
        let element = Rect::new(100.0, 0.0, 4.0, 10.0);
        let chart = Rect::new(100.0, 50.0, 320.0, 218.0);
        let pos = tooltip_position(&element, Some(&chart), 60.0, 30.0, 60.0, TOOLTIP_OFFSET_PX);
        assert_eq!(pos.left, -28.0);
        assert_eq!(pos.top, -30.0);
    }

    #[test]
    fn test_positioner_reads_latest_pointer() {
        let pointer_y = Rc::new(Cell::new(0.0));
        let positioner = TooltipPositioner::new(Rc::clone(&pointer_y), TOOLTIP_OFFSET_PX);
        let element = Rect::new(10.0, 0.0, 10.0, 10.0);
        let chart = Rect::new(0.0, 0.0, 200.0, 200.0);

        pointer_y.set(100.0);
        assert_eq!(positioner.position(&element, Some(&chart), 10.0, 20.0).top, 70.0);

        pointer_y.set(150.0);
        assert_eq!(positioner.position(&element, Some(&chart), 10.0, 20.0).top, 120.0);
    }
}
