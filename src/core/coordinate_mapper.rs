use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, ChartRect, DataPoint, LinearScale, NiceAxis};

/// Time/value domain currently mapped onto the chart rectangle.
///
/// Rendering and hit-testing must build their mappers from the same
/// `ActiveBounds`, otherwise the crosshair drifts away from drawn geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBounds {
    pub min_time: f64,
    pub max_time: f64,
    pub min_value: f64,
    pub max_value: f64,
}

impl ActiveBounds {
    /// Raw time range combined with the resolved value axis.
    #[must_use]
    pub fn resolve(bounds: ChartBounds, axis: NiceAxis) -> Self {
        Self {
            min_time: bounds.min_time,
            max_time: bounds.max_time,
            min_value: axis.min,
            max_value: axis.max,
        }
    }

    #[must_use]
    pub fn contains_value(self, value: f64) -> bool {
        self.min_value <= value && value <= self.max_value
    }
}

/// Data-space to pixel-space projection for one chart rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    rect: ChartRect,
    bounds: ActiveBounds,
    time_scale: LinearScale,
    value_scale: LinearScale,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(rect: ChartRect, bounds: ActiveBounds) -> Self {
        Self {
            rect,
            bounds,
            time_scale: LinearScale::new(bounds.min_time, bounds.max_time, rect.left, rect.width),
            // Pixel y grows downward, so the value axis runs bottom to top.
            value_scale: LinearScale::new(
                bounds.min_value,
                bounds.max_value,
                rect.bottom(),
                -rect.height,
            ),
        }
    }

    #[must_use]
    pub fn rect(&self) -> ChartRect {
        self.rect
    }

    #[must_use]
    pub fn bounds(&self) -> ActiveBounds {
        self.bounds
    }

    #[must_use]
    pub fn time_to_x(&self, timestamp: f64) -> f64 {
        self.time_scale.domain_to_pixel(timestamp)
    }

    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.value_scale.domain_to_pixel(value)
    }

    #[must_use]
    pub fn x_to_time(&self, x: f64) -> f64 {
        self.time_scale.pixel_to_domain(x)
    }

    #[must_use]
    pub fn y_to_value(&self, y: f64) -> f64 {
        self.value_scale.pixel_to_domain(y)
    }

    #[must_use]
    pub fn to_pixel(&self, point: DataPoint) -> (f64, f64) {
        (self.time_to_x(point.timestamp), self.value_to_y(point.value))
    }

    #[must_use]
    pub fn from_pixel(&self, x: f64, y: f64) -> DataPoint {
        DataPoint::new(self.x_to_time(x), self.y_to_value(y))
    }

    /// Projects every finite point, preserving array order.
    #[must_use]
    pub fn project(&self, points: &[DataPoint]) -> Vec<(f64, f64)> {
        points
            .iter()
            .copied()
            .filter(|point| point.is_finite())
            .map(|point| self.to_pixel(point))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{ActiveBounds, CoordinateMapper};
    use crate::core::{ChartRect, DataPoint};

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(
            ChartRect::new(50.0, 20.0, 700.0, 300.0),
            ActiveBounds {
                min_time: 0.0,
                max_time: 10.0,
                min_value: -50.0,
                max_value: 50.0,
            },
        )
    }

    #[test]
    fn maps_corners_of_active_bounds() {
        let mapper = mapper();
        let (x, y) = mapper.to_pixel(DataPoint::new(0.0, 50.0));
        assert_abs_diff_eq!(x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 20.0, epsilon = 1e-9);

        let (x, y) = mapper.to_pixel(DataPoint::new(10.0, -50.0));
        assert_abs_diff_eq!(x, 750.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 320.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_value_maps_to_vertical_center() {
        assert_abs_diff_eq!(mapper().value_to_y(0.0), 170.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_ranges_map_to_rect_center() {
        let mapper = CoordinateMapper::new(
            ChartRect::new(0.0, 0.0, 100.0, 60.0),
            ActiveBounds {
                min_time: 3.0,
                max_time: 3.0,
                min_value: 7.0,
                max_value: 7.0,
            },
        );
        assert_eq!(mapper.to_pixel(DataPoint::new(3.0, 7.0)), (50.0, 30.0));
        assert_eq!(mapper.x_to_time(10.0), 3.0);
    }

    #[test]
    fn non_finite_points_are_not_projected() {
        let projected = mapper().project(&[
            DataPoint::new(1.0, 1.0),
            DataPoint::new(f64::NAN, 1.0),
            DataPoint::new(2.0, 2.0),
        ]);
        assert_eq!(projected.len(), 2);
    }
}
