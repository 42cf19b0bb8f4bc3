use crate::core::{
    ActiveBounds, AxisScalingOptions, ChartBounds, DataPoint, NiceAxis, Series, compute_nice_axis,
};

/// Series collection plus the derived value/time state the renderer and
/// hit-testing share.
///
/// Every mutation recomputes `bounds` and `nice_axis` before returning, so
/// readers never observe stale derived state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub(super) series: Vec<Series>,
    pub(super) scaling: AxisScalingOptions,
    pub(super) bounds: ChartBounds,
    pub(super) nice_axis: NiceAxis,
}

impl ChartModel {
    #[must_use]
    pub fn new(scaling: AxisScalingOptions) -> Self {
        let bounds = ChartBounds::default();
        Self {
            series: Vec::new(),
            scaling,
            bounds,
            nice_axis: compute_nice_axis(bounds, scaling),
        }
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn bounds(&self) -> ChartBounds {
        self.bounds
    }

    #[must_use]
    pub fn nice_axis(&self) -> NiceAxis {
        self.nice_axis
    }

    #[must_use]
    pub fn scaling(&self) -> AxisScalingOptions {
        self.scaling
    }

    /// Time range from the data, value range from the resolved axis.
    #[must_use]
    pub fn active_bounds(&self) -> ActiveBounds {
        ActiveBounds::resolve(self.bounds, self.nice_axis)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
        self.recompute();
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
        self.recompute();
    }

    /// Returns `false` without touching the model when `index` is out of range.
    pub fn replace_series(&mut self, index: usize, series: Series) -> bool {
        let Some(slot) = self.series.get_mut(index) else {
            return false;
        };
        *slot = series;
        self.recompute();
        true
    }

    /// Appends to the series at `index` in place, keeping at most `max_len`
    /// points. Returns `false` when `index` is out of range.
    pub fn push_point_windowed(&mut self, index: usize, point: DataPoint, max_len: usize) -> bool {
        let Some(series) = self.series.get_mut(index) else {
            return false;
        };
        series.push_windowed(point, max_len);
        self.recompute();
        true
    }

    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
        self.recompute();
    }

    pub fn set_scaling(&mut self, scaling: AxisScalingOptions) {
        self.scaling = scaling;
        self.nice_axis = compute_nice_axis(self.bounds, self.scaling);
    }

    fn recompute(&mut self) {
        self.bounds = ChartBounds::from_series(&self.series);
        self.nice_axis = compute_nice_axis(self.bounds, self.scaling);
    }
}

impl Default for ChartModel {
    fn default() -> Self {
        Self::new(AxisScalingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::ChartModel;
    use crate::core::{AxisScalingOptions, ChartBounds, DataPoint, Series};
    use crate::render::Color;

    fn series(name: &str, values: &[(f64, f64)]) -> Series {
        Series::new(name, Color::WHITE).with_points(
            values
                .iter()
                .map(|(time, value)| DataPoint::new(*time, *value))
                .collect(),
        )
    }

    #[test]
    fn empty_model_uses_default_bounds() {
        let model = ChartModel::default();
        assert_eq!(model.bounds(), ChartBounds::default());
        assert!(model.series().is_empty());
    }

    #[test]
    fn mutations_recompute_derived_state() {
        let mut model = ChartModel::default();
        model.add_series(series("a", &[(0.0, 0.0), (10.0, 47.0)]));
        let first = model.nice_axis();
        assert_eq!(model.bounds().max_time, 10.0);

        model.add_series(series("b", &[(20.0, 470.0)]));
        assert_eq!(model.bounds().max_time, 20.0);
        assert!(model.nice_axis().max > first.max);

        model.clear_series();
        assert_eq!(model.bounds(), ChartBounds::default());
    }

    #[test]
    fn replace_out_of_range_is_a_noop() {
        let mut model = ChartModel::default();
        model.add_series(series("a", &[(0.0, 1.0), (1.0, 2.0)]));
        let before = model.clone();

        assert!(!model.replace_series(3, series("x", &[(0.0, 100.0)])));
        assert_eq!(model, before);

        assert!(model.replace_series(0, series("b", &[(0.0, 100.0), (5.0, 200.0)])));
        assert_eq!(model.series()[0].name, "b");
        assert_eq!(model.bounds().max_time, 5.0);
    }

    #[test]
    fn windowed_push_mutates_in_place_and_recomputes() {
        let mut model = ChartModel::default();
        model.add_series(series("a", &[(0.0, 1.0), (1.0, 2.0)]));

        assert!(model.push_point_windowed(0, DataPoint::new(2.0, 30.0), 2));
        let timestamps: Vec<f64> = model.series()[0].points.iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, vec![1.0, 2.0]);
        assert_eq!(model.bounds().min_time, 1.0);
        assert!(model.nice_axis().max >= 30.0);

        let before = model.clone();
        assert!(!model.push_point_windowed(1, DataPoint::new(3.0, 4.0), 2));
        assert_eq!(model, before);
    }

    #[test]
    fn scaling_change_keeps_bounds() {
        let mut model = ChartModel::default();
        model.set_series(vec![series("a", &[(0.0, 3.0), (1.0, 7.0)])]);
        let bounds = model.bounds();

        model.set_scaling(AxisScalingOptions {
            manual_range: Some((-50.0, 50.0)),
            ..AxisScalingOptions::default()
        });
        assert_eq!(model.bounds(), bounds);
        assert!(model.active_bounds().min_value <= -50.0);
        assert!(model.active_bounds().max_value >= 50.0);
    }
}
