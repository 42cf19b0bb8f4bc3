use tracing::debug;

use crate::core::{ActiveBounds, ChartRect, CoordinateMapper, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartModel, ChartOptions, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series model, the sanitized options, the viewport
/// and pointer state, and hands finished frames to its renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) options: ChartOptions,
    pub(super) model: ChartModel,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the widget. Zero sizes are allowed and produce empty frames.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.interaction.revalidate(self.chart_rect());
        debug!(
            width = viewport.width,
            height = viewport.height,
            "set viewport"
        );
    }

    #[must_use]
    pub fn chart_rect(&self) -> ChartRect {
        self.viewport.chart_rect()
    }

    #[must_use]
    pub fn options(&self) -> ChartOptions {
        self.options
    }

    /// Sanitizes `options`, stores them, and recomputes the value axis once.
    pub fn apply_options(&mut self, options: ChartOptions) {
        let options = options.sanitized();
        self.options = options;
        self.model.set_scaling(options.axis_scaling());
        let axis = self.model.nice_axis();
        debug!(
            y_divisions = options.y_axis_divisions,
            x_divisions = options.x_axis_divisions,
            mode = ?axis.mode,
            axis_min = axis.min,
            axis_max = axis.max,
            "apply chart options"
        );
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.options.style
    }

    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    #[must_use]
    pub fn active_bounds(&self) -> ActiveBounds {
        self.model.active_bounds()
    }

    /// Mapper shared by frame building and pointer hit-testing.
    #[must_use]
    pub fn coordinate_mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.chart_rect(), self.active_bounds())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
