use pinch_core::*;

#[test]
fn valid_thresholds_construct_a_tracker() {
    let cfg = TrackerConfig::new(50.0, 70.0).unwrap();
    assert_eq!(cfg.margin(), 20.0);
    let tracker = PointerGestureTracker::new(cfg).unwrap();
    assert_eq!(tracker.config(), &cfg);
    assert!(tracker.is_empty());
}

#[test]
fn inverted_or_equal_thresholds_are_rejected() {
    assert_eq!(
        TrackerConfig::new(70.0, 50.0),
        Err(GestureError::Configuration {
            low: 70.0,
            high: 50.0
        })
    );
    assert!(TrackerConfig::new(60.0, 60.0).is_err());
}

#[test]
fn non_positive_or_non_finite_thresholds_are_rejected() {
    assert!(TrackerConfig::new(0.0, 10.0).is_err());
    assert!(TrackerConfig::new(-5.0, 10.0).is_err());
    assert!(TrackerConfig::new(f32::NAN, 10.0).is_err());
    assert!(TrackerConfig::new(10.0, f32::INFINITY).is_err());
    assert!(TrackerConfig::with_margin(10.0, 0.0).is_err());
}

#[test]
fn tracker_construction_revalidates_public_fields() {
    let cfg = TrackerConfig {
        low_threshold: 90.0,
        high_threshold: 10.0,
    };
    let err = PointerGestureTracker::new(cfg).err().unwrap();
    assert!(matches!(err, GestureError::Configuration { .. }));
    assert!(err.to_string().contains("low=90"));
}

#[test]
fn default_config_uses_demo_threshold_with_margin() {
    let cfg = TrackerConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.low_threshold, DEFAULT_PINCH_THRESHOLD);
    assert_eq!(cfg.margin(), DEFAULT_PINCH_MARGIN);
    assert_eq!(PointerGestureTracker::default().config(), &cfg);
}

#[test]
fn invalid_input_error_names_the_pointer() {
    let err = GestureError::InvalidInput {
        id: PointerId(7),
        x: f32::NAN,
        y: 0.0,
    };
    assert!(err.to_string().contains("pointer 7"));
}
