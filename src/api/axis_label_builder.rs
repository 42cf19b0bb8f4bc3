use crate::core::{CoordinateMapper, NiceAxis};
use crate::render::{Renderer, TextHAlign, TextPrimitive, TextVAlign};

use super::ChartEngine;
use super::axis_label_format::{format_stepped_value, format_time, format_uniform_value};

/// Stepped ticks closer than this to zero get the zero-line highlight.
const ZERO_TICK_EPSILON: f64 = 1e-4;
/// Uniform labels closer than this to zero suppress the extra zero label.
const UNIFORM_ZERO_EPSILON: f64 = 0.01;

impl<R: Renderer> ChartEngine<R> {
    /// Builds the Y and X axis labels for the current state.
    ///
    /// Returns nothing when the chart rect is collapsed.
    #[must_use]
    pub fn build_axis_labels(&self) -> Vec<TextPrimitive> {
        let mapper = self.coordinate_mapper();
        if !mapper.rect().is_drawable() {
            return Vec::new();
        }
        let mut labels = self.value_axis_labels(&mapper);
        labels.extend(self.time_axis_labels(&mapper));
        labels
    }

    fn value_axis_labels(&self, mapper: &CoordinateMapper) -> Vec<TextPrimitive> {
        let axis = self.model.nice_axis();
        match axis.step_size {
            Some(step) => self.stepped_value_labels(mapper, axis, step),
            None => self.uniform_value_labels(mapper, axis),
        }
    }

    fn stepped_value_labels(
        &self,
        mapper: &CoordinateMapper,
        axis: NiceAxis,
        step: f64,
    ) -> Vec<TextPrimitive> {
        axis.tick_values()
            .into_iter()
            .map(|value| {
                let text = format_stepped_value(value, step);
                let label = self.value_label(text, mapper.value_to_y(value));
                if self.options.show_zero_line && value.abs() < ZERO_TICK_EPSILON {
                    self.highlight_zero(label)
                } else {
                    label
                }
            })
            .collect()
    }

    fn uniform_value_labels(&self, mapper: &CoordinateMapper, axis: NiceAxis) -> Vec<TextPrimitive> {
        let rect = mapper.rect();
        let divisions = axis.step_count.max(1);
        let mut has_zero_label = false;
        let mut labels: Vec<TextPrimitive> = (0..=divisions)
            .map(|index| {
                let ratio = index as f64 / divisions as f64;
                let value = axis.max - axis.span() * ratio;
                has_zero_label |= value.abs() < UNIFORM_ZERO_EPSILON;
                self.value_label(format_uniform_value(value), rect.top + rect.height * ratio)
            })
            .collect();

        if self.options.show_zero_line && axis.contains_zero() && !has_zero_label {
            let zero = self.value_label(format_uniform_value(0.0), mapper.value_to_y(0.0));
            labels.push(self.highlight_zero(zero));
        }
        labels
    }

    fn time_axis_labels(&self, mapper: &CoordinateMapper) -> Vec<TextPrimitive> {
        let rect = mapper.rect();
        let bounds = mapper.bounds();
        let divisions = self.options.x_axis_divisions.max(1);
        let y = rect.bottom() + self.options.style.time_label_gap_px;
        (0..=divisions)
            .map(|index| {
                let ratio = f64::from(index) / f64::from(divisions);
                let time = bounds.min_time + (bounds.max_time - bounds.min_time) * ratio;
                TextPrimitive::new(
                    format_time(time),
                    rect.left + rect.width * ratio,
                    y,
                    self.label_font_size(),
                    self.options.text_color,
                    TextHAlign::Center,
                    TextVAlign::Top,
                )
            })
            .collect()
    }

    fn value_label(&self, text: String, y: f64) -> TextPrimitive {
        let rect = self.chart_rect();
        TextPrimitive::new(
            text,
            rect.left - self.options.style.value_label_gap_px,
            y,
            self.label_font_size(),
            self.options.text_color,
            TextHAlign::Right,
            TextVAlign::Middle,
        )
    }

    fn highlight_zero(&self, label: TextPrimitive) -> TextPrimitive {
        TextPrimitive {
            color: self.options.zero_line_color,
            ..label
        }
        .with_bold(true)
    }

    fn label_font_size(&self) -> f64 {
        f64::from(self.options.text_size)
    }
}
