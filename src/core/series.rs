use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::render::Color;

/// Named, colored line series.
///
/// Points are kept in insertion order. Chronological order is a convention
/// of the host and is not enforced; polylines follow array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: Color,
    pub points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Appends a sample and drops the oldest ones beyond `max_len`.
    ///
    /// `max_len == 0` keeps the series empty.
    pub fn push_windowed(&mut self, point: DataPoint, max_len: usize) {
        self.points.push(point);
        if self.points.len() > max_len {
            let overflow = self.points.len() - max_len;
            self.points.drain(..overflow);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point whose timestamp is closest to `time`.
    ///
    /// Linear scan over finite samples; on ties the first point in array
    /// order wins.
    #[must_use]
    pub fn nearest_point(&self, time: f64) -> Option<DataPoint> {
        if !time.is_finite() {
            return None;
        }
        self.points
            .iter()
            .copied()
            .filter(|point| point.is_finite())
            .min_by_key(|point| OrderedFloat((point.timestamp - time).abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::Series;
    use crate::core::DataPoint;
    use crate::render::Color;

    fn series(timestamps: &[f64]) -> Series {
        Series::new("s", Color::rgb(1.0, 0.0, 0.0)).with_points(
            timestamps
                .iter()
                .map(|t| DataPoint::new(*t, *t * 10.0))
                .collect(),
        )
    }

    #[test]
    fn nearest_point_picks_smallest_time_distance() {
        let series = series(&[0.0, 1.0, 2.0, 3.0]);
        let nearest = series.nearest_point(1.6).expect("nearest");
        assert_eq!(nearest.timestamp, 2.0);
    }

    #[test]
    fn nearest_point_prefers_first_on_tie() {
        let series = Series::new("s", Color::rgb(1.0, 1.0, 1.0)).with_points(vec![
            DataPoint::new(1.0, 10.0),
            DataPoint::new(3.0, 30.0),
            DataPoint::new(1.0, 99.0),
        ]);
        let nearest = series.nearest_point(2.0).expect("nearest");
        assert_eq!(nearest, DataPoint::new(1.0, 10.0));
    }

    #[test]
    fn nearest_point_on_empty_series_is_none() {
        assert!(series(&[]).nearest_point(1.0).is_none());
    }

    #[test]
    fn push_windowed_evicts_oldest_points() {
        let mut series = series(&[]);
        for index in 0..5 {
            series.push_windowed(DataPoint::new(f64::from(index), 0.0), 3);
        }
        let timestamps: Vec<f64> = series.points.iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, vec![2.0, 3.0, 4.0]);
    }
}
