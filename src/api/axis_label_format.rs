/// Decimal places for a stepped value label, chosen from the step magnitude.
#[must_use]
pub(super) fn value_label_precision(step: f64) -> usize {
    let step = step.abs();
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else if step >= 0.001 {
        3
    } else {
        4
    }
}

/// Formats `value` with `precision` decimals, never printing a negative zero.
#[must_use]
pub(super) fn format_fixed(value: f64, precision: usize) -> String {
    let half_unit = 0.5 * 10_f64.powi(-(precision as i32));
    let value = if value.abs() < half_unit { 0.0 } else { value };
    format!("{value:.precision$}")
}

#[must_use]
pub(super) fn format_stepped_value(value: f64, step: f64) -> String {
    format_fixed(value, value_label_precision(step))
}

#[must_use]
pub(super) fn format_uniform_value(value: f64) -> String {
    format_fixed(value, 1)
}

#[must_use]
pub(super) fn format_time(time: f64) -> String {
    format_fixed(time, 1)
}

#[cfg(test)]
mod tests {
    use super::{format_fixed, format_stepped_value, format_time, value_label_precision};

    #[test]
    fn precision_tracks_step_magnitude() {
        assert_eq!(value_label_precision(10.0), 0);
        assert_eq!(value_label_precision(1.0), 0);
        assert_eq!(value_label_precision(0.25), 1);
        assert_eq!(value_label_precision(0.05), 2);
        assert_eq!(value_label_precision(0.002), 3);
        assert_eq!(value_label_precision(0.0005), 4);
    }

    #[test]
    fn stepped_labels_use_step_precision() {
        assert_eq!(format_stepped_value(40.0, 10.0), "40");
        assert_eq!(format_stepped_value(0.5, 0.25), "0.5");
        assert_eq!(format_stepped_value(0.15, 0.05), "0.15");
    }

    #[test]
    fn rounding_residue_prints_as_plain_zero() {
        assert_eq!(format_fixed(-1e-12, 1), "0.0");
        assert_eq!(format_fixed(-0.0, 0), "0");
        assert_eq!(format_time(-0.04), "0.0");
        assert_eq!(format_time(12.34), "12.3");
    }
}
