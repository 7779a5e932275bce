//! Property-based tests for the simulation and view-state invariants.

use proptest::prelude::*;
use std::f64::consts::TAU;

use crate::render::generate_stars;
use crate::sim::step_angle;
use crate::types::{ViewState, MAX_ZOOM, MIN_ZOOM};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// N steps at a fixed speed advance the phase by exactly N * w * s.
    #[test]
    fn prop_angle_advance_is_linear(
        initial in -TAU..TAU,
        angular_speed in 0.0001f64..0.05,
        speed in 0.1f64..3.0,
        steps in 0usize..500,
    ) {
        let mut angle = initial;
        for _ in 0..steps {
            angle = step_angle(angle, angular_speed, speed);
        }
        let expected = initial + steps as f64 * angular_speed * speed;
        prop_assert!((angle - expected).abs() < 1e-9);
    }

    /// Any sequence of wheel events keeps the zoom inside its bounds.
    #[test]
    fn prop_zoom_stays_clamped(events in proptest::collection::vec(any::<bool>(), 0..300)) {
        let mut view = ViewState::default();
        for zoom_in in events {
            view.apply_zoom_step(zoom_in);
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&view.zoom));
        }
    }

    /// Star generation honors count and per-field bounds for any viewport,
    /// including degenerate zero-sized ones.
    #[test]
    fn prop_star_bounds(width in 0.0f32..4000.0, height in 0.0f32..4000.0, count in 0usize..400) {
        let stars = generate_stars(width, height, count);
        prop_assert_eq!(stars.len(), count);
        for star in stars {
            prop_assert!(star.x >= 0.0 && (star.x < width || star.x == 0.0));
            prop_assert!(star.y >= 0.0 && (star.y < height || star.y == 0.0));
            prop_assert!((0.5..2.0).contains(&star.size));
            prop_assert!((0.2..1.0).contains(&star.opacity));
        }
    }
}
