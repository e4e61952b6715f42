//! Tests for capped thrust, turning and look-at.
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_relative_eq;
use banana::{random_heading, random_heading_with, InvalidArgument, Turn, NORTH};
use rand::{rngs::StdRng, SeedableRng};
use rstest::rstest;
use test_utils::{circle, rect};

const TOLERANCE: f64 = 1e-9;

#[test]
fn capped_thrust_never_exceeds_cap_after_a_call() {
    let mut body = circle((0.0, 0.0), 4.0);
    body.set_rotation(0.3);

    for _ in 0..200 {
        body.move_forward_capped(1.0, 5.0).expect("force within cap");
        assert!(
            body.velocity().length() <= 5.0 + TOLERANCE,
            "speed {} above cap",
            body.velocity().length()
        );
        body.advance_one_tick();
    }

    body.move_forward_capped(1.0, 5.0).expect("force within cap");
    assert_relative_eq!(body.speed(), 5.0, epsilon = TOLERANCE);
}

#[test]
fn capped_thrust_keeps_direction_when_scaling() {
    let mut body = circle((0.0, 0.0), 4.0);
    body.set_velocity(30.0, 40.0);
    body.move_forward_capped(1.0, 5.0).expect("force within cap");
    assert_relative_eq!(body.velocity().x, 3.0, epsilon = TOLERANCE);
    assert_relative_eq!(body.velocity().y, 4.0, epsilon = TOLERANCE);
    assert_relative_eq!(body.speed(), 5.0, epsilon = TOLERANCE);
}

#[test]
fn excessive_thrust_is_rejected_without_mutation() {
    let mut body = circle((0.0, 0.0), 4.0);
    body.set_velocity(1.0, 2.0);
    let before = body.clone();

    let err = body.move_forward_capped(6.0, 5.0);

    assert_eq!(
        err,
        Err(InvalidArgument::ForceExceedsMaxSpeed {
            force: 6.0,
            max_speed: 5.0
        })
    );
    assert_eq!(body, before);
}

#[rstest]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
#[case::negative_infinite(f64::NEG_INFINITY)]
fn non_finite_force_is_rejected_without_mutation(#[case] force: f64) {
    let mut body = circle((0.0, 0.0), 4.0);
    body.set_velocity(1.0, 2.0);
    let before = body.clone();

    assert!(matches!(
        body.move_forward_capped(force, 5.0),
        Err(InvalidArgument::NonFiniteForce { .. })
    ));
    assert!(matches!(
        body.turn_toward(Turn::Clockwise, 0.2, force),
        Err(InvalidArgument::NonFiniteForce { .. })
    ));
    assert_eq!(body.acceleration(), glam::DVec2::ZERO);
    assert_eq!(body.rotational_acceleration(), 0.0);
    assert_eq!(body.velocity(), before.velocity());
}

#[rstest]
#[case::clockwise(Turn::Clockwise)]
#[case::counter_clockwise(Turn::CounterClockwise)]
fn excessive_turn_is_rejected_without_mutation(#[case] direction: Turn) {
    let mut body = rect((0.0, 0.0), (2.0, 2.0));
    body.set_rotational_velocity(0.5);
    let before = body.clone();

    let err = body.turn_toward(direction, 5.0, 6.0);

    assert!(matches!(
        err,
        Err(InvalidArgument::ForceExceedsMaxRotationalSpeed { .. })
    ));
    assert_eq!(body, before);
}

#[test]
fn turning_settles_at_the_cap() {
    let mut body = rect((0.0, 0.0), (2.0, 2.0));
    for _ in 0..50 {
        body.turn_toward(Turn::Clockwise, 0.2, 0.05).expect("force within cap");
        body.advance_one_tick();
    }
    assert!(body.rotational_velocity() < 0.0);
    assert!(body.rotational_velocity().abs() <= 0.2 + 0.05 + TOLERANCE);

    body.set_rotational_velocity(-0.3);
    body.turn_toward(Turn::Clockwise, 0.2, 0.05).expect("force within cap");
    assert_eq!(body.rotational_velocity(), -0.2);
    assert_eq!(body.rotational_acceleration(), 0.0);
}

#[rstest]
#[case::right((10.0, 0.0))]
#[case::right_below((10.0, 3.0))]
#[case::right_above((10.0, -3.0))]
fn target_on_positive_x_side_faces_east_half(#[case] target: (f64, f64)) {
    let mut body = rect((0.0, 0.0), (1.0, 1.0));
    body.look_at_point(target.0, target.1);
    let rotation = body.rotation();
    assert!(rotation > -FRAC_PI_2 && rotation < FRAC_PI_2, "rotation {rotation}");
    assert_heading_points_at(rotation, target);
}

#[rstest]
#[case::left((-10.0, 0.0))]
#[case::left_below((-10.0, 3.0))]
#[case::left_above((-10.0, -3.0))]
fn target_on_negative_x_side_is_shifted_by_pi(#[case] target: (f64, f64)) {
    let mut body = rect((0.0, 0.0), (1.0, 1.0));
    body.look_at_point(target.0, target.1);
    let rotation = body.rotation();
    assert!(rotation > FRAC_PI_2 && rotation < 3.0 * FRAC_PI_2, "rotation {rotation}");
    assert_relative_eq!(rotation - PI, (target.1 / target.0).atan());
    assert_heading_points_at(rotation, target);
}

#[test]
fn look_at_straight_up_faces_north() {
    let mut body = rect((0.0, 0.0), (1.0, 1.0));
    body.set_rotation(0.0);
    body.look_at_point(0.0, -20.0);
    assert_eq!(body.rotation(), NORTH);
}

#[test]
fn look_at_entity_uses_centers() {
    let mut hunter = circle((5.0, 5.0), 1.0);
    let prey = rect((5.0 + 4.0, 5.0 + 4.0), (3.0, 1.0));
    hunter.look_at(&prey);
    assert_relative_eq!(hunter.rotation(), PI / 4.0);
}

#[test]
fn random_headings_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let heading = random_heading_with(&mut rng);
        assert!((0.0..TAU).contains(&heading));
    }
    assert!((0.0..TAU).contains(&random_heading()));
}

fn assert_heading_points_at(rotation: f64, target: (f64, f64)) {
    let expected = target.1.atan2(target.0);
    let (sin, cos) = rotation.sin_cos();
    assert_relative_eq!(cos, expected.cos(), epsilon = TOLERANCE);
    assert_relative_eq!(sin, expected.sin(), epsilon = TOLERANCE);
}
