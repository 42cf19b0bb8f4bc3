use serde::{Deserialize, Serialize};

/// One-dimensional linear mapping from a data domain onto a pixel interval.
///
/// `pixel_start` maps to `domain_start` and `pixel_start + pixel_length` to
/// `domain_end`. A zero-width domain collapses onto the interval midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_length: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain_start: f64, domain_end: f64, pixel_start: f64, pixel_length: f64) -> Self {
        Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_length,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.domain_end - self.domain_start;
        !span.is_finite() || span == 0.0
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.pixel_start + self.pixel_length * 0.5;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * self.pixel_length
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        if self.is_degenerate() || self.pixel_length == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.pixel_start) / self.pixel_length;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_domain_edges_to_pixel_edges() {
        let scale = LinearScale::new(10.0, 20.0, 50.0, 200.0);
        assert_eq!(scale.domain_to_pixel(10.0), 50.0);
        assert_eq!(scale.domain_to_pixel(20.0), 250.0);
        assert_eq!(scale.pixel_to_domain(150.0), 15.0);
    }

    #[test]
    fn inverted_pixel_direction_is_supported() {
        let scale = LinearScale::new(0.0, 100.0, 300.0, -200.0);
        assert_eq!(scale.domain_to_pixel(0.0), 300.0);
        assert_eq!(scale.domain_to_pixel(100.0), 100.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new(5.0, 5.0, 0.0, 100.0);
        assert!(scale.is_degenerate());
        assert_eq!(scale.domain_to_pixel(42.0), 50.0);
        assert_eq!(scale.pixel_to_domain(80.0), 5.0);
    }
}
