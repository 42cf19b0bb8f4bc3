use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartRect, CoordinateMapper, DataPoint, Series};
use crate::render::Color;

/// Pointer hover state of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverState {
    /// Pointer outside the chart rectangle or off the widget.
    Idle,
    /// Pointer inside the chart rectangle.
    Hovering,
}

/// Tooltip placement relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipLayout {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Width assumed when checking right-edge overflow.
    pub assumed_width: f64,
    /// Height assumed when checking top-edge overflow.
    pub assumed_height: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            offset_x: 15.0,
            offset_y: -20.0,
            assumed_width: 150.0,
            assumed_height: 20.0,
        }
    }
}

impl TooltipLayout {
    /// Anchor for a tooltip shown at pointer `(x, y)` inside a widget `widget_width` wide.
    ///
    /// Flips to the left of the pointer when the box would cross the right edge
    /// and below the pointer when it would cross the top margin.
    #[must_use]
    pub fn anchor(self, x: f64, y: f64, widget_width: f64) -> (f64, f64) {
        let mut anchor_x = x + self.offset_x;
        let mut anchor_y = y + self.offset_y;
        if anchor_x + self.assumed_width > widget_width {
            anchor_x = x - self.assumed_width;
        }
        if anchor_y < self.assumed_height {
            anchor_y = y + self.assumed_height;
        }
        (anchor_x, anchor_y)
    }

    /// Replaces non-finite offsets and non-positive sizes with defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let positive_or = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            offset_x: finite_or(self.offset_x, defaults.offset_x),
            offset_y: finite_or(self.offset_y, defaults.offset_y),
            assumed_width: positive_or(self.assumed_width, defaults.assumed_width),
            assumed_height: positive_or(self.assumed_height, defaults.assumed_height),
        }
    }
}

/// One tooltip row, optionally prefixed by a series color swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub swatch: Option<Color>,
}

/// Formatted hover tooltip positioned in widget-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub time: f64,
    pub lines: SmallVec<[TooltipLine; 4]>,
}

impl Tooltip {
    /// Plain multi-line text, header first.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Nearest sample of one series under the crosshair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairMarker {
    pub series_index: usize,
    pub point: DataPoint,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// Crosshair overlay state for the current pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub time: f64,
    pub markers: SmallVec<[CrosshairMarker; 4]>,
}

/// Pointer tracking for the two-state hover machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    hover: HoverState,
    pointer_x: f64,
    pointer_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hover: HoverState::Idle,
            pointer_x: 0.0,
            pointer_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn pointer(self) -> (f64, f64) {
        (self.pointer_x, self.pointer_y)
    }

    /// Records the pointer and resolves the hover state against `rect`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, rect: ChartRect) -> HoverState {
        self.pointer_x = x;
        self.pointer_y = y;
        self.hover = if rect.is_drawable() && rect.contains(x, y) {
            HoverState::Hovering
        } else {
            HoverState::Idle
        };
        self.hover
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    /// Drops hover when the chart rectangle changed under a resting pointer.
    pub fn revalidate(&mut self, rect: ChartRect) {
        if self.hover == HoverState::Hovering
            && !(rect.is_drawable() && rect.contains(self.pointer_x, self.pointer_y))
        {
            self.hover = HoverState::Idle;
        }
    }
}

/// Nearest point of every non-empty series at the time under `pointer_x`.
#[must_use]
pub fn resolve_crosshair(
    series: &[Series],
    mapper: &CoordinateMapper,
    pointer_x: f64,
) -> Crosshair {
    let time = mapper.x_to_time(pointer_x);
    let markers = series
        .iter()
        .enumerate()
        .filter_map(|(series_index, series)| {
            let point = series.nearest_point(time)?;
            let (x, y) = mapper.to_pixel(point);
            Some(CrosshairMarker {
                series_index,
                point,
                x,
                y,
                color: series.color,
            })
        })
        .collect();
    Crosshair {
        x: pointer_x,
        time,
        markers,
    }
}

/// Builds the `Time:` header plus one `name: value` row per marker.
#[must_use]
pub fn format_tooltip(
    series: &[Series],
    crosshair: &Crosshair,
    anchor: (f64, f64),
) -> Tooltip {
    let mut lines: SmallVec<[TooltipLine; 4]> = SmallVec::new();
    lines.push(TooltipLine {
        text: format!("Time: {:.2}", crosshair.time),
        swatch: None,
    });
    for marker in &crosshair.markers {
        let name = series
            .get(marker.series_index)
            .map_or("", |series| series.name.as_str());
        lines.push(TooltipLine {
            text: format!("{name}: {:.2}", marker.point.value),
            swatch: Some(marker.color),
        });
    }
    Tooltip {
        x: anchor.0,
        y: anchor.1,
        time: crosshair.time,
        lines,
    }
}
