use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Fixed visual constants of a chart frame.
///
/// Colors and widths the host rarely touches live here; the commonly tuned
/// ones (grid, zero line, text, series line width) sit on `ChartOptions`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background_color: Color,
    pub grid_line_width: f64,
    pub axis_line_width: f64,
    pub zero_line_width: f64,
    pub point_marker_radius: f64,
    pub crosshair_line_color: Color,
    pub crosshair_line_width: f64,
    pub crosshair_halo_color: Color,
    pub crosshair_halo_radius: f64,
    pub crosshair_marker_radius: f64,
    /// Gap between the right edge of Y-axis labels and the plot's left edge.
    pub value_label_gap_px: f64,
    /// Gap between the plot's bottom edge and the top of X-axis labels.
    pub time_label_gap_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(0.1, 0.1, 0.15),
            grid_line_width: 1.0,
            axis_line_width: 2.0,
            zero_line_width: 2.0,
            point_marker_radius: 3.0,
            crosshair_line_color: Color::rgba(1.0, 1.0, 1.0, 0.3),
            crosshair_line_width: 1.0,
            crosshair_halo_color: Color::rgba(1.0, 1.0, 1.0, 0.2),
            crosshair_halo_radius: 8.0,
            crosshair_marker_radius: 5.0,
            value_label_gap_px: 5.0,
            time_label_gap_px: 5.0,
        }
    }
}

impl RenderStyle {
    /// Replaces unusable entries with their defaults.
    #[must_use]
    pub(super) fn sanitized(self) -> Self {
        let defaults = Self::default();
        let color = |value: Color, fallback: Color| if value.is_valid() { value } else { fallback };
        let positive = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let non_negative = |value: f64, fallback: f64| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        };

        Self {
            background_color: color(self.background_color, defaults.background_color),
            grid_line_width: positive(self.grid_line_width, defaults.grid_line_width),
            axis_line_width: positive(self.axis_line_width, defaults.axis_line_width),
            zero_line_width: positive(self.zero_line_width, defaults.zero_line_width),
            point_marker_radius: positive(self.point_marker_radius, defaults.point_marker_radius),
            crosshair_line_color: color(self.crosshair_line_color, defaults.crosshair_line_color),
            crosshair_line_width: positive(
                self.crosshair_line_width,
                defaults.crosshair_line_width,
            ),
            crosshair_halo_color: color(self.crosshair_halo_color, defaults.crosshair_halo_color),
            crosshair_halo_radius: positive(
                self.crosshair_halo_radius,
                defaults.crosshair_halo_radius,
            ),
            crosshair_marker_radius: positive(
                self.crosshair_marker_radius,
                defaults.crosshair_marker_radius,
            ),
            value_label_gap_px: non_negative(self.value_label_gap_px, defaults.value_label_gap_px),
            time_label_gap_px: non_negative(self.time_label_gap_px, defaults.time_label_gap_px),
        }
    }
}
