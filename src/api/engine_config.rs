use serde::{Deserialize, Serialize};

use crate::core::{AxisScalingOptions, MIN_MANUAL_STEP, Viewport};
use crate::error::ChartResult;
use crate::interaction::TooltipLayout;
use crate::render::Color;

use super::RenderStyle;

pub const MIN_AXIS_DIVISIONS: u32 = 2;
pub const MAX_AXIS_DIVISIONS: u32 = 20;
pub const MIN_LINE_WIDTH: f64 = 0.5;
pub const MAX_LINE_WIDTH: f64 = 10.0;
pub const MIN_TEXT_SIZE: u32 = 8;
pub const MAX_TEXT_SIZE: u32 = 20;

/// User-facing chart settings.
///
/// Every field has a default, so partial JSON documents load. Values are
/// stored as given; `sanitized()` produces the clamped copy the engine
/// actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub y_axis_divisions: u32,
    pub x_axis_divisions: u32,
    pub line_width: f64,
    pub show_grid: bool,
    pub grid_color: Color,
    pub show_zero_line: bool,
    pub zero_line_color: Color,
    pub text_color: Color,
    pub text_size: u32,
    pub use_nice_y_steps: bool,
    pub use_manual_y_range: bool,
    pub manual_y_min: f64,
    pub manual_y_max: f64,
    pub use_manual_y_step: bool,
    pub manual_y_step: f64,
    pub tooltip_layout: TooltipLayout,
    pub style: RenderStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            y_axis_divisions: 5,
            x_axis_divisions: 10,
            line_width: 2.0,
            show_grid: true,
            grid_color: Color::rgba(0.3, 0.3, 0.3, 0.3),
            show_zero_line: true,
            zero_line_color: Color::rgba(1.0, 1.0, 1.0, 0.5),
            text_color: Color::WHITE,
            text_size: 11,
            use_nice_y_steps: true,
            use_manual_y_range: false,
            manual_y_min: 0.0,
            manual_y_max: 100.0,
            use_manual_y_step: false,
            manual_y_step: 1.0,
            tooltip_layout: TooltipLayout::default(),
            style: RenderStyle::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_axis_divisions(mut self, y_axis_divisions: u32, x_axis_divisions: u32) -> Self {
        self.y_axis_divisions = y_axis_divisions;
        self.x_axis_divisions = x_axis_divisions;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_zero_line(mut self, show_zero_line: bool) -> Self {
        self.show_zero_line = show_zero_line;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text_color: Color, text_size: u32) -> Self {
        self.text_color = text_color;
        self.text_size = text_size;
        self
    }

    #[must_use]
    pub fn with_nice_y_steps(mut self, use_nice_y_steps: bool) -> Self {
        self.use_nice_y_steps = use_nice_y_steps;
        self
    }

    /// Pins the value axis to `min..max` instead of the padded data range.
    #[must_use]
    pub fn with_manual_y_range(mut self, min: f64, max: f64) -> Self {
        self.use_manual_y_range = true;
        self.manual_y_min = min;
        self.manual_y_max = max;
        self
    }

    /// Forces a fixed value-axis step. Takes precedence over both nice and
    /// uniform division modes.
    #[must_use]
    pub fn with_manual_y_step(mut self, step: f64) -> Self {
        self.use_manual_y_step = true;
        self.manual_y_step = step;
        self
    }

    #[must_use]
    pub fn with_tooltip_layout(mut self, tooltip_layout: TooltipLayout) -> Self {
        self.tooltip_layout = tooltip_layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns a copy with every field clamped into its supported range.
    ///
    /// Non-finite numbers and out-of-range colors fall back to defaults.
    /// A manual range with `min >= max` is kept here and corrected by the
    /// axis scaler.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let color_or = |value: Color, fallback: Color| if value.is_valid() { value } else { fallback };

        Self {
            y_axis_divisions: self
                .y_axis_divisions
                .clamp(MIN_AXIS_DIVISIONS, MAX_AXIS_DIVISIONS),
            x_axis_divisions: self
                .x_axis_divisions
                .clamp(MIN_AXIS_DIVISIONS, MAX_AXIS_DIVISIONS),
            line_width: finite_or(self.line_width, defaults.line_width)
                .clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH),
            show_grid: self.show_grid,
            grid_color: color_or(self.grid_color, defaults.grid_color),
            show_zero_line: self.show_zero_line,
            zero_line_color: color_or(self.zero_line_color, defaults.zero_line_color),
            text_color: color_or(self.text_color, defaults.text_color),
            text_size: self.text_size.clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE),
            use_nice_y_steps: self.use_nice_y_steps,
            use_manual_y_range: self.use_manual_y_range,
            manual_y_min: finite_or(self.manual_y_min, defaults.manual_y_min),
            manual_y_max: finite_or(self.manual_y_max, defaults.manual_y_max),
            use_manual_y_step: self.use_manual_y_step,
            manual_y_step: finite_or(self.manual_y_step, defaults.manual_y_step)
                .max(MIN_MANUAL_STEP),
            tooltip_layout: self.tooltip_layout.sanitized(),
            style: self.style.sanitized(),
        }
    }

    /// Value-axis scaling inputs derived from these options.
    #[must_use]
    pub fn axis_scaling(&self) -> AxisScalingOptions {
        AxisScalingOptions {
            division_count_hint: self.y_axis_divisions,
            use_nice_steps: self.use_nice_y_steps,
            manual_range: self
                .use_manual_y_range
                .then_some((self.manual_y_min, self.manual_y_max)),
            manual_step: self.use_manual_y_step.then_some(self.manual_y_step),
            include_zero: self.show_zero_line,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup alongside their own state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
