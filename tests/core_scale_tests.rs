use approx::assert_abs_diff_eq;
use chart_rs::core::{
    ActiveBounds, AxisScalingOptions, AxisStepMode, ChartBounds, ChartRect, CoordinateMapper,
    DataPoint, LinearScale, Series, Viewport, compute_nice_axis,
};
use chart_rs::render::Color;

fn raw_bounds(min_value: f64, max_value: f64) -> ChartBounds {
    ChartBounds {
        min_value,
        max_value,
        min_time: 0.0,
        max_time: 10.0,
    }
}

#[test]
fn range_47_with_five_divisions_steps_by_ten() {
    let axis = compute_nice_axis(raw_bounds(0.0, 47.0), AxisScalingOptions::default());
    assert_eq!(axis.step_size, Some(10.0));
    assert_eq!(axis.mode, AxisStepMode::Nice);
}

#[test]
fn dense_manual_step_is_rescaled_to_one_hundred_steps() {
    let options = AxisScalingOptions {
        manual_range: Some((0.0, 1000.0)),
        manual_step: Some(0.001),
        ..AxisScalingOptions::default()
    };
    let axis = compute_nice_axis(raw_bounds(0.0, 1.0), options);
    assert_eq!(axis.step_size, Some(10.0));
    assert_eq!(axis.tick_values().len(), 101);
}

#[test]
fn empty_manual_range_becomes_unit_wide() {
    let options = AxisScalingOptions {
        manual_range: Some((5.0, 5.0)),
        ..AxisScalingOptions::default()
    };
    let axis = compute_nice_axis(raw_bounds(0.0, 1.0), options);
    assert_eq!((axis.min, axis.max), (5.0, 6.0));
}

#[test]
fn inverted_manual_range_keeps_min() {
    let options = AxisScalingOptions {
        manual_range: Some((10.0, -10.0)),
        use_nice_steps: false,
        ..AxisScalingOptions::default()
    };
    let axis = compute_nice_axis(raw_bounds(0.0, 1.0), options);
    assert_eq!((axis.min, axis.max), (10.0, 11.0));
}

#[test]
fn straddling_range_keeps_zero_visible() {
    let axis = compute_nice_axis(raw_bounds(-3.0, 7.0), AxisScalingOptions::default());
    assert!(axis.min <= 0.0);
    assert!(axis.max >= 0.0);
    assert!(axis.tick_values().iter().any(|value| value.abs() < 1e-9));
}

#[test]
fn padded_series_bounds_feed_the_axis() {
    let series = Series::new("load", Color::WHITE).with_points(vec![
        DataPoint::new(0.0, 10.0),
        DataPoint::new(5.0, 30.0),
        DataPoint::new(10.0, 20.0),
    ]);
    let bounds = ChartBounds::from_series(&[series]);
    assert_abs_diff_eq!(bounds.min_value, 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.max_value, 32.0, epsilon = 1e-12);

    let axis = compute_nice_axis(bounds, AxisScalingOptions::default());
    assert_eq!(axis.step_size, Some(5.0));
    assert_eq!((axis.min, axis.max), (5.0, 35.0));
    assert_eq!(axis.step_count, 6);
}

#[test]
fn linear_scale_maps_both_directions() {
    let scale = LinearScale::new(0.0, 100.0, 50.0, 500.0);
    assert_abs_diff_eq!(scale.domain_to_pixel(25.0), 175.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.pixel_to_domain(175.0), 25.0, epsilon = 1e-9);
}

#[test]
fn mapper_uses_viewport_chart_rect() {
    let rect = Viewport::new(800, 400).chart_rect();
    assert_eq!(rect, ChartRect::new(50.0, 20.0, 730.0, 330.0));

    let mapper = CoordinateMapper::new(
        rect,
        ActiveBounds {
            min_time: 0.0,
            max_time: 10.0,
            min_value: -5.0,
            max_value: 10.0,
        },
    );
    let (x, y) = mapper.to_pixel(DataPoint::new(10.0, 0.0));
    assert_abs_diff_eq!(x, 780.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 240.0, epsilon = 1e-9);

    let point = mapper.from_pixel(x, y);
    assert_abs_diff_eq!(point.timestamp, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.value, 0.0, epsilon = 1e-9);
}
