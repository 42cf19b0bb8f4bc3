use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Series;

/// Fraction of the raw value span added above and below the data.
pub const VALUE_PADDING_RATIO: f64 = 0.1;

/// Raw data extents across every series.
///
/// The value range carries [`VALUE_PADDING_RATIO`] padding; the time range
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub min_value: f64,
    pub max_value: f64,
    pub min_time: f64,
    pub max_time: f64,
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            min_time: 0.0,
            max_time: 1.0,
        }
    }
}

impl ChartBounds {
    /// Scans all finite points of all series.
    ///
    /// Falls back to `(0, 1)` in both dimensions when no finite point exists
    /// or when the padded extents overflow `f64`.
    #[must_use]
    pub fn from_series(series: &[Series]) -> Self {
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        let mut min_time = f64::INFINITY;
        let mut max_time = f64::NEG_INFINITY;

        let finite_points = series
            .iter()
            .flat_map(|series| series.points.iter())
            .filter(|point| point.is_finite());
        for point in finite_points {
            min_value = min_value.min(point.value);
            max_value = max_value.max(point.value);
            min_time = min_time.min(point.timestamp);
            max_time = max_time.max(point.timestamp);
        }

        if min_value > max_value {
            return Self::default();
        }

        let padding = (max_value - min_value) * VALUE_PADDING_RATIO;
        let bounds = Self {
            min_value: min_value - padding,
            max_value: max_value + padding,
            min_time,
            max_time,
        };
        if !bounds.value_span().is_finite() || !bounds.time_span().is_finite() {
            warn!(
                min_value,
                max_value,
                min_time,
                max_time,
                "data extents overflow f64; using default bounds"
            );
            return Self::default();
        }
        bounds
    }

    #[must_use]
    pub fn value_span(self) -> f64 {
        self.max_value - self.min_value
    }

    #[must_use]
    pub fn time_span(self) -> f64 {
        self.max_time - self.min_time
    }
}

#[cfg(test)]
mod tests {
    use super::ChartBounds;
    use crate::core::{DataPoint, Series};
    use crate::render::Color;

    #[test]
    fn empty_input_defaults_to_unit_ranges() {
        assert_eq!(ChartBounds::from_series(&[]), ChartBounds::default());
        let empty = Series::new("empty", Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(ChartBounds::from_series(&[empty]), ChartBounds::default());
    }

    #[test]
    fn value_range_is_padded_by_ten_percent() {
        let series = Series::new("a", Color::rgb(0.0, 0.0, 1.0)).with_points(vec![
            DataPoint::new(2.0, 10.0),
            DataPoint::new(5.0, 20.0),
            DataPoint::new(3.0, 15.0),
        ]);
        let bounds = ChartBounds::from_series(&[series]);
        assert!((bounds.min_value - 9.0).abs() <= 1e-12);
        assert!((bounds.max_value - 21.0).abs() <= 1e-12);
        assert_eq!(bounds.min_time, 2.0);
        assert_eq!(bounds.max_time, 5.0);
    }

    #[test]
    fn non_finite_points_are_ignored() {
        let series = Series::new("a", Color::rgb(0.0, 0.0, 1.0)).with_points(vec![
            DataPoint::new(f64::NAN, 100.0),
            DataPoint::new(1.0, f64::INFINITY),
            DataPoint::new(4.0, 2.0),
        ]);
        let bounds = ChartBounds::from_series(&[series]);
        assert_eq!(bounds.min_value, 2.0);
        assert_eq!(bounds.max_value, 2.0);
        assert_eq!(bounds.min_time, 4.0);
    }

    #[test]
    fn overflowing_extents_fall_back_to_defaults() {
        let values = Series::new("a", Color::rgb(0.0, 0.0, 1.0)).with_points(vec![
            DataPoint::new(0.0, -1e308),
            DataPoint::new(1.0, 1e308),
        ]);
        assert_eq!(ChartBounds::from_series(&[values]), ChartBounds::default());

        let times = Series::new("b", Color::rgb(0.0, 0.0, 1.0)).with_points(vec![
            DataPoint::new(-f64::MAX, 1.0),
            DataPoint::new(f64::MAX, 2.0),
        ]);
        assert_eq!(ChartBounds::from_series(&[times]), ChartBounds::default());
    }
}
