use tracing::{debug, trace};

use crate::core::{DataPoint, Series};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.model.series()
    }

    /// Appends a series and recomputes bounds and the value axis.
    pub fn add_series(&mut self, series: Series) {
        debug!(
            name = %series.name,
            points = series.len(),
            series_count = self.model.series().len() + 1,
            "add series"
        );
        self.model.add_series(series);
    }

    pub fn clear_series(&mut self) {
        debug!(removed = self.model.series().len(), "clear series");
        self.model.clear_series();
    }

    /// Swaps the series at `index`. Out-of-range indices are ignored and
    /// reported through the return value.
    pub fn replace_series(&mut self, index: usize, series: Series) -> bool {
        let replaced = self.model.replace_series(index, series);
        debug!(index, replaced, "replace series");
        replaced
    }

    /// Replaces every series in one pass with a single recompute.
    pub fn set_series(&mut self, series: Vec<Series>) {
        debug!(
            series_count = series.len(),
            points = series.iter().map(Series::len).sum::<usize>(),
            "set series"
        );
        self.model.set_series(series);
    }

    /// Appends `point` to the series at `index`, evicting the oldest samples
    /// beyond `max_len`. Returns `false` when `index` is out of range.
    pub fn push_point_windowed(&mut self, index: usize, point: DataPoint, max_len: usize) -> bool {
        let pushed = self.model.push_point_windowed(index, point, max_len);
        trace!(
            index,
            pushed,
            points = self.model.series().get(index).map_or(0, Series::len),
            "push windowed point"
        );
        pushed
    }
}
