use tracing::trace;

use crate::interaction::{Crosshair, HoverState, Tooltip, format_tooltip, resolve_crosshair};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.interaction.hover() == HoverState::Hovering
    }

    /// Records a pointer position in widget pixels.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> HoverState {
        let previous = self.interaction.hover();
        let state = self.interaction.on_pointer_move(x, y, self.chart_rect());
        if state != previous {
            trace!(x, y, ?previous, ?state, "hover state changed");
        }
        state
    }

    pub fn pointer_leave(&mut self) {
        if self.is_hovering() {
            trace!("pointer left chart");
        }
        self.interaction.on_pointer_leave();
    }

    /// Nearest point of each non-empty series under the pointer, if hovering.
    #[must_use]
    pub fn crosshair(&self) -> Option<Crosshair> {
        if !self.is_hovering() {
            return None;
        }
        let (pointer_x, _) = self.interaction.pointer();
        Some(resolve_crosshair(
            self.model.series(),
            &self.coordinate_mapper(),
            pointer_x,
        ))
    }

    /// Tooltip for the current hover position. `None` when idle or when the
    /// chart has no series.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        if self.model.series().is_empty() {
            return None;
        }
        let crosshair = self.crosshair()?;
        Some(self.tooltip_for(&crosshair))
    }

    pub(super) fn tooltip_for(&self, crosshair: &Crosshair) -> Tooltip {
        let (pointer_x, pointer_y) = self.interaction.pointer();
        let anchor = self.options.tooltip_layout.anchor(
            pointer_x,
            pointer_y,
            f64::from(self.viewport.width),
        );
        format_tooltip(self.model.series(), crosshair, anchor)
    }
}
