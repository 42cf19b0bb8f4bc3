use approx::assert_abs_diff_eq;
use chart_rs::api::{ChartEngine, ChartEngineConfig, ChartOptions};
use chart_rs::core::{DataPoint, Series, Viewport};
use chart_rs::interaction::HoverState;
use chart_rs::render::{Color, DrawPrimitive, NullRenderer};

const RED: Color = Color::rgb(1.0, 0.2, 0.2);
const BLUE: Color = Color::rgb(0.2, 0.4, 1.0);

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
}

fn ramp(name: &str, color: Color, values: &[f64]) -> Series {
    Series::new(name, color).with_points(
        values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index as f64, *value))
            .collect(),
    )
}

#[test]
fn hover_follows_chart_rect_edges() {
    let mut engine = engine();
    assert_eq!(engine.hover_state(), HoverState::Idle);

    assert_eq!(engine.pointer_move(50.0, 20.0), HoverState::Hovering);
    assert_eq!(engine.pointer_move(780.0, 350.0), HoverState::Hovering);
    assert_eq!(engine.pointer_move(49.9, 200.0), HoverState::Idle);
    assert_eq!(engine.pointer_move(400.0, 351.0), HoverState::Idle);

    engine.pointer_move(400.0, 200.0);
    engine.pointer_leave();
    assert_eq!(engine.hover_state(), HoverState::Idle);
    assert!(engine.crosshair().is_none());
}

#[test]
fn crosshair_picks_nearest_timestamp() {
    let mut engine = engine();
    engine.add_series(ramp("A", RED, &[10.0, 20.0, 30.0, 40.0]));

    let x = engine.coordinate_mapper().time_to_x(1.6);
    engine.pointer_move(x, 200.0);

    let crosshair = engine.crosshair().expect("hovering");
    assert_abs_diff_eq!(crosshair.time, 1.6, epsilon = 1e-9);
    assert_eq!(crosshair.markers.len(), 1);
    assert_eq!(crosshair.markers[0].point, DataPoint::new(2.0, 30.0));
}

#[test]
fn tooltip_lists_time_and_each_series() {
    let mut engine = engine();
    engine.add_series(ramp("A", RED, &[10.0, 20.0, 30.0, 40.0]));
    engine.add_series(ramp("B", BLUE, &[-1.0, -2.0, -3.25, -4.0]));

    let x = engine.coordinate_mapper().time_to_x(1.6);
    engine.pointer_move(x, 200.0);

    let tooltip = engine.tooltip().expect("tooltip while hovering");
    assert_eq!(tooltip.text(), "Time: 1.60\nA: 30.00\nB: -3.25");
    assert_eq!(tooltip.lines[0].swatch, None);
    assert_eq!(tooltip.lines[1].swatch, Some(RED));
    assert_eq!(tooltip.lines[2].swatch, Some(BLUE));
    assert_abs_diff_eq!(tooltip.x, x + 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tooltip.y, 180.0, epsilon = 1e-9);
}

#[test]
fn tooltip_flips_near_right_and_top_edges() {
    let mut engine = engine();
    engine.add_series(ramp("A", RED, &[1.0, 2.0]));

    engine.pointer_move(700.0, 30.0);
    let tooltip = engine.tooltip().expect("tooltip");
    assert_eq!((tooltip.x, tooltip.y), (550.0, 50.0));
}

#[test]
fn no_tooltip_without_series() {
    let mut engine = engine();
    engine.pointer_move(400.0, 200.0);

    assert!(engine.is_hovering());
    assert!(engine.tooltip().is_none());

    let frame = engine.build_render_frame();
    assert!(frame.tooltip.is_none());
    assert_eq!(frame.circle_count(), 0);
}

#[test]
fn empty_series_get_no_marker_or_tooltip_row() {
    let mut engine = engine();
    engine.add_series(ramp("A", RED, &[1.0, 2.0, 3.0]));
    engine.add_series(Series::new("empty", BLUE));
    engine.pointer_move(400.0, 200.0);

    let crosshair = engine.crosshair().expect("hovering");
    assert_eq!(crosshair.markers.len(), 1);
    assert_eq!(crosshair.markers[0].series_index, 0);
    assert_eq!(engine.tooltip().expect("tooltip").lines.len(), 2);
}

#[test]
fn crosshair_markers_sit_on_drawn_vertices() {
    let mut engine = engine();
    engine.apply_options(ChartOptions::default().with_manual_y_range(-100.0, 100.0));
    engine.add_series(ramp("A", RED, &[10.0, 20.0, 30.0, 40.0]));

    let x = engine.coordinate_mapper().time_to_x(2.2);
    engine.pointer_move(x, 200.0);
    let frame = engine.build_render_frame();
    let marker = engine.crosshair().expect("hovering").markers[0].clone();

    let series_line = frame
        .primitives
        .iter()
        .find_map(|primitive| match primitive {
            DrawPrimitive::Polyline(line) if line.color == RED => Some(line.clone()),
            _ => None,
        })
        .expect("series polyline");
    assert!(
        series_line
            .points
            .iter()
            .any(|(px, py)| (px - marker.x).abs() < 1e-9 && (py - marker.y).abs() < 1e-9)
    );

    let style = engine.render_style();
    let halo_and_dot: Vec<_> = frame
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            DrawPrimitive::Circle(circle)
                if circle.center_x == marker.x && circle.center_y == marker.y =>
            {
                Some(circle.radius)
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        halo_and_dot,
        vec![
            style.point_marker_radius,
            style.crosshair_halo_radius,
            style.crosshair_marker_radius,
        ]
    );
}

#[test]
fn crosshair_line_spans_chart_height() {
    let mut engine = engine();
    engine.apply_options(ChartOptions::default().with_grid(false).with_zero_line(false));
    engine.add_series(ramp("A", RED, &[1.0, 2.0]));
    engine.pointer_move(321.0, 100.0);

    let frame = engine.build_render_frame();
    let lines: Vec<_> = frame
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            DrawPrimitive::Line(line) => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!((lines[0].x1, lines[0].y1), (321.0, 20.0));
    assert_eq!((lines[0].x2, lines[0].y2), (321.0, 350.0));
    assert_eq!(lines[0].stroke_width, 1.0);
}

#[test]
fn shrinking_viewport_drops_hover() {
    let mut engine = engine();
    engine.add_series(ramp("A", RED, &[1.0, 2.0]));
    engine.pointer_move(700.0, 300.0);
    assert!(engine.is_hovering());

    engine.set_viewport(Viewport::new(400, 200));
    assert!(!engine.is_hovering());
    assert!(engine.build_render_frame().tooltip.is_none());
}
