use tracing::trace;

use crate::core::{CoordinateMapper, NiceAxis};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current chart state into a backend-agnostic frame.
    ///
    /// Primitives are pushed in paint order: background, grid, axes, zero
    /// line, series, crosshair. A collapsed chart rect yields an empty frame.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        let mapper = self.coordinate_mapper();
        if !mapper.rect().is_drawable() {
            trace!(
                width = self.viewport.width,
                height = self.viewport.height,
                "chart rect collapsed; empty frame"
            );
            return frame;
        }

        self.push_background(&mut frame);
        if self.options.show_grid {
            self.push_grid(&mut frame, &mapper);
        }
        self.push_axes(&mut frame, &mapper);
        if self.options.show_zero_line {
            self.push_zero_line(&mut frame, &mapper);
        }
        self.push_series(&mut frame, &mapper);

        if let Some(crosshair) = self.crosshair() {
            let style = self.options.style;
            let rect = mapper.rect();
            frame.push(LinePrimitive::new(
                crosshair.x,
                rect.top,
                crosshair.x,
                rect.bottom(),
                style.crosshair_line_width,
                style.crosshair_line_color,
            ));
            for marker in &crosshair.markers {
                frame.push(CirclePrimitive::new(
                    marker.x,
                    marker.y,
                    style.crosshair_halo_radius,
                    style.crosshair_halo_color,
                ));
                frame.push(CirclePrimitive::new(
                    marker.x,
                    marker.y,
                    style.crosshair_marker_radius,
                    marker.color,
                ));
            }
            if !self.model.series().is_empty() {
                frame.tooltip = Some(self.tooltip_for(&crosshair));
            }
        }

        frame.labels = self.build_axis_labels();
        trace!(
            primitives = frame.primitives.len(),
            labels = frame.labels.len(),
            tooltip = frame.tooltip.is_some(),
            "build render frame"
        );
        frame
    }

    fn push_background(&self, frame: &mut RenderFrame) {
        frame.push(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
            self.options.style.background_color,
        ));
    }

    fn push_grid(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let rect = mapper.rect();
        let width = self.options.style.grid_line_width;
        let color = self.options.grid_color;

        for y in value_grid_positions(self.model.nice_axis(), mapper) {
            frame.push(LinePrimitive::new(rect.left, y, rect.right(), y, width, color));
        }

        let divisions = self.options.x_axis_divisions.max(1);
        for index in 0..=divisions {
            let x = rect.left + rect.width * (f64::from(index) / f64::from(divisions));
            frame.push(LinePrimitive::new(x, rect.top, x, rect.bottom(), width, color));
        }
    }

    fn push_axes(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let rect = mapper.rect();
        frame.push(PolylinePrimitive::new(
            vec![
                (rect.left, rect.top),
                (rect.left, rect.bottom()),
                (rect.right(), rect.bottom()),
            ],
            self.options.style.axis_line_width,
            self.options.text_color,
        ));
    }

    fn push_zero_line(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        if !mapper.bounds().contains_value(0.0) {
            return;
        }
        let rect = mapper.rect();
        let y = mapper.value_to_y(0.0);
        frame.push(LinePrimitive::new(
            rect.left,
            y,
            rect.right(),
            y,
            self.options.style.zero_line_width,
            self.options.zero_line_color,
        ));
    }

    fn push_series(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let marker_radius = self.options.style.point_marker_radius;
        for series in self.model.series() {
            let points = mapper.project(&series.points);
            if points.len() >= 2 {
                frame.push(PolylinePrimitive::new(
                    points.clone(),
                    self.options.line_width,
                    series.color,
                ));
            }
            for (x, y) in points {
                frame.push(CirclePrimitive::new(x, y, marker_radius, series.color));
            }
        }
    }
}

/// Pixel rows of horizontal grid lines.
///
/// Stepped axes place a line at every tick value; uniform axes split the
/// chart height into equal parts.
fn value_grid_positions(axis: NiceAxis, mapper: &CoordinateMapper) -> Vec<f64> {
    match axis.step_size {
        Some(_) => axis
            .tick_values()
            .into_iter()
            .map(|value| mapper.value_to_y(value))
            .collect(),
        None => {
            let rect = mapper.rect();
            let divisions = axis.step_count.max(1);
            (0..=divisions)
                .map(|index| rect.top + rect.height * (index as f64 / divisions as f64))
                .collect()
        }
    }
}
