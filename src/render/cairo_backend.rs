use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::Tooltip;
use crate::render::{
    Color, DrawPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

const TOOLTIP_BACKGROUND: Color = Color::rgba(0.05, 0.05, 0.08, 0.9);
const TOOLTIP_TEXT: Color = Color::WHITE;
const TOOLTIP_FONT_SIZE_PX: f64 = 11.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TOOLTIP_SWATCH_RADIUS_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polylines_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub labels_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Creates a surface matching the engine viewport.
    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::InvalidData("viewport width exceeds i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::InvalidData("viewport height exceeds i32".to_owned()))?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                DrawPrimitive::Rect(rect) => {
                    apply_color(context, rect.fill_color);
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.rects_drawn += 1;
                }
                DrawPrimitive::Polyline(polyline) => {
                    apply_color(context, polyline.color);
                    context.set_line_width(polyline.stroke_width);
                    context.set_line_cap(LineCap::Round);
                    context.set_line_join(LineJoin::Round);
                    let mut points = polyline.points.iter();
                    if let Some((x, y)) = points.next() {
                        context.move_to(*x, *y);
                    }
                    for (x, y) in points {
                        context.line_to(*x, *y);
                    }
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
                    stats.polylines_drawn += 1;
                }
                DrawPrimitive::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.set_line_cap(LineCap::Butt);
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawPrimitive::Circle(circle) => {
                    apply_color(context, circle.fill_color);
                    context.new_sub_path();
                    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    stats.circles_drawn += 1;
                }
            }
        }

        for label in &frame.labels {
            draw_label(context, label);
            stats.labels_drawn += 1;
        }

        if let Some(tooltip) = &frame.tooltip {
            draw_tooltip(context, tooltip)?;
            stats.tooltip_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_layout(context: &Context, text: &str, font_size_px: f64, bold: bool) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
    if bold {
        font_description.set_weight(pango::Weight::Bold);
    }
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);
    layout
}

fn draw_label(context: &Context, label: &TextPrimitive) {
    let layout = create_layout(context, &label.text, label.font_size_px, label.bold);
    let (text_width, text_height) = layout.pixel_size();
    let x = match label.h_align {
        TextHAlign::Left => label.x,
        TextHAlign::Center => label.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => label.x - f64::from(text_width),
    };
    let y = match label.v_align {
        TextVAlign::Top => label.y,
        TextVAlign::Middle => label.y - f64::from(text_height) / 2.0,
    };

    apply_color(context, label.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn draw_tooltip(context: &Context, tooltip: &Tooltip) -> ChartResult<()> {
    let swatch_space = TOOLTIP_SWATCH_RADIUS_PX * 2.0 + 4.0;
    let layouts: Vec<(pango::Layout, bool)> = tooltip
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            (
                create_layout(context, &line.text, TOOLTIP_FONT_SIZE_PX, index == 0),
                line.swatch.is_some(),
            )
        })
        .collect();

    let mut box_width: f64 = 0.0;
    let mut box_height = TOOLTIP_PADDING_PX * 2.0;
    for (layout, has_swatch) in &layouts {
        let (width, height) = layout.pixel_size();
        let indent = if *has_swatch { swatch_space } else { 0.0 };
        box_width = box_width.max(f64::from(width) + indent);
        box_height += f64::from(height);
    }
    box_width += TOOLTIP_PADDING_PX * 2.0;

    apply_color(context, TOOLTIP_BACKGROUND);
    context.rectangle(tooltip.x, tooltip.y, box_width, box_height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill tooltip", err))?;

    let mut cursor_y = tooltip.y + TOOLTIP_PADDING_PX;
    for (line, (layout, _)) in tooltip.lines.iter().zip(&layouts) {
        let (_, height) = layout.pixel_size();
        let mut cursor_x = tooltip.x + TOOLTIP_PADDING_PX;
        if let Some(swatch) = line.swatch {
            apply_color(context, swatch);
            context.new_sub_path();
            context.arc(
                cursor_x + TOOLTIP_SWATCH_RADIUS_PX,
                cursor_y + f64::from(height) / 2.0,
                TOOLTIP_SWATCH_RADIUS_PX,
                0.0,
                TAU,
            );
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill tooltip swatch", err))?;
            cursor_x += swatch_space;
        }
        apply_color(context, TOOLTIP_TEXT);
        context.move_to(cursor_x, cursor_y);
        pangocairo::functions::show_layout(context, layout);
        cursor_y += f64::from(height);
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
