use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::Tooltip;
use crate::render::{DrawPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// `primitives` are painted in order. `labels` form a separate overlay layer
/// drawn after all primitives, followed by the optional tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<DrawPrimitive>,
    pub labels: Vec<TextPrimitive>,
    pub tooltip: Option<Tooltip>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
            labels: Vec::new(),
            tooltip: None,
        }
    }

    pub fn push(&mut self, primitive: impl Into<DrawPrimitive>) {
        self.primitives.push(primitive.into());
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: impl Into<DrawPrimitive>) -> Self {
        self.push(primitive);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: TextPrimitive) -> Self {
        self.labels.push(label);
        self
    }

    /// Checks every primitive and label for drawable geometry.
    ///
    /// A collapsed viewport is valid as long as the frame is empty.
    pub fn validate(&self) -> ChartResult<()> {
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            for swatch in tooltip.lines.iter().filter_map(|line| line.swatch) {
                swatch.validate()?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.labels.is_empty() && self.tooltip.is_none()
    }

    #[must_use]
    pub fn polyline_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, DrawPrimitive::Polyline(_)))
            .count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, DrawPrimitive::Line(_)))
            .count()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, DrawPrimitive::Circle(_)))
            .count()
    }
}
