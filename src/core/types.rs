use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;

/// Left padding reserved for Y-axis labels.
pub const CHART_PADDING_LEFT_PX: f64 = 50.0;
/// Right margin between the plot area and the widget edge.
pub const CHART_MARGIN_RIGHT_PX: f64 = 20.0;
/// Top margin between the plot area and the widget edge.
pub const CHART_MARGIN_TOP_PX: f64 = 20.0;
/// Bottom padding reserved for X-axis labels.
pub const CHART_PADDING_BOTTOM_PX: f64 = 50.0;

/// Widget size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Plot rectangle inside this viewport after axis paddings are applied.
    #[must_use]
    pub fn chart_rect(self) -> ChartRect {
        ChartRect::from_viewport(self)
    }
}

/// Plot area in widget-local pixel coordinates.
///
/// Width or height may be zero or negative when the widget is collapsed; callers
/// check [`ChartRect::is_drawable`] before producing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let left = CHART_PADDING_LEFT_PX;
        let right = f64::from(viewport.width) - CHART_MARGIN_RIGHT_PX;
        let top = CHART_MARGIN_TOP_PX;
        let bottom = f64::from(viewport.height) - CHART_PADDING_BOTTOM_PX;
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Inclusive hit-test against all four edges.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// One timestamped scalar sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: f64,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.timestamp.is_finite() && self.value.is_finite()
    }

    /// Builds a point from a wall-clock time and an exact decimal value.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            timestamp: datetime_to_unix_seconds(time),
            value: decimal_to_f64(value, "value")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartRect, Viewport};

    #[test]
    fn chart_rect_applies_fixed_paddings() {
        let rect = Viewport::new(800, 400).chart_rect();
        assert_eq!(rect, ChartRect::new(50.0, 20.0, 730.0, 330.0));
        assert_eq!(rect.right(), 780.0);
        assert_eq!(rect.bottom(), 350.0);
    }

    #[test]
    fn collapsed_viewport_yields_non_drawable_rect() {
        assert!(!Viewport::new(0, 0).chart_rect().is_drawable());
        assert!(!Viewport::new(70, 400).chart_rect().is_drawable());
        assert!(!Viewport::new(400, 70).chart_rect().is_drawable());
        assert!(Viewport::new(71, 71).chart_rect().is_drawable());
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let rect = ChartRect::new(50.0, 20.0, 100.0, 100.0);
        assert!(rect.contains(50.0, 20.0));
        assert!(rect.contains(150.0, 120.0));
        assert!(!rect.contains(150.1, 60.0));
        assert!(!rect.contains(49.9, 60.0));
    }
}
