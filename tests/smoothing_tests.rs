use approx::assert_relative_eq;
use glam::Vec2;
use pinch_core::*;

#[test]
fn moving_average_is_mean_of_window() {
    let mut avg = MovingAverage::new(3);
    assert_eq!(avg.value(), 0.0);
    assert_relative_eq!(avg.add(3.0), 3.0);
    assert_relative_eq!(avg.add(6.0), 4.5);
    assert_relative_eq!(avg.add(9.0), 6.0);
    // 3.0 falls out of the window.
    assert_relative_eq!(avg.add(12.0), 9.0);
    assert_eq!(avg.len(), 3);
}

#[test]
fn moving_average_skips_non_finite_samples() {
    let mut avg = MovingAverage::new(4);
    avg.add(2.0);
    assert_relative_eq!(avg.add(f32::NAN), 2.0);
    assert_relative_eq!(avg.add(f32::INFINITY), 2.0);
    assert_eq!(avg.len(), 1);
}

#[test]
fn zero_window_behaves_as_passthrough() {
    let mut avg = MovingAverage::new(0);
    assert_eq!(avg.window(), 1);
    assert_relative_eq!(avg.add(5.0), 5.0);
    assert_relative_eq!(avg.add(-1.0), -1.0);
}

#[test]
fn reset_empties_the_window() {
    let mut avg = MovingAverage::default();
    assert_eq!(avg.window(), DEFAULT_SMOOTHING_WINDOW);
    avg.add(10.0);
    avg.reset();
    assert!(avg.is_empty());
    assert_relative_eq!(avg.add(1.0), 1.0);
}

#[test]
fn point_smoother_converges_on_steady_input() {
    let mut s = PointSmoother::new(8);
    s.add(Vec2::new(0.0, 1.0));
    let mut out = Vec2::ZERO;
    for _ in 0..8 {
        out = s.add(Vec2::new(0.5, 0.25));
    }
    assert_relative_eq!(out.x, 0.5);
    assert_relative_eq!(out.y, 0.25);
    assert_eq!(s.value(), out);
}

#[test]
fn relative_and_absolute_points_round_trip_through_viewport() {
    let viewport = Vec2::new(800.0, 600.0);
    let rel = relative_point(Vec2::new(200.0, 450.0), viewport).unwrap();
    assert_relative_eq!(rel.x, 0.25);
    assert_relative_eq!(rel.y, 0.75);
    assert_eq!(absolute_point(rel, viewport), Vec2::new(200.0, 450.0));
    assert_eq!(viewport_center(viewport), Vec2::new(400.0, 300.0));
}

#[test]
fn degenerate_viewport_has_no_relative_point() {
    assert_eq!(relative_point(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    assert_eq!(relative_point(Vec2::ONE, Vec2::new(800.0, -1.0)), None);
}

#[test]
fn offset_from_middle_centres_element() {
    let offset = offset_from_middle(Vec2::new(100.0, 100.0), Vec2::new(40.0, 20.0));
    assert_eq!(offset, Vec2::new(80.0, 90.0));
}
