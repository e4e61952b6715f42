//! One-tick integration and damping toward rest.
//!
//! Integration and damping are independent primitives. Entity kinds choose
//! the order; damping before integration decays the velocity used for this
//! tick's displacement, damping after it only affects the next tick.
use glam::DVec2;

use crate::Body;

impl Body {
    /// Advances the body by one tick.
    ///
    /// Records the current position as the last valid one, folds the
    /// pending acceleration into velocity and velocity into position, then
    /// does the same for rotation. Both accelerations are zero afterwards.
    pub fn advance_one_tick(&mut self) {
        self.last_valid = self.position;

        self.velocity += self.acceleration;
        self.refresh_speed();
        self.position += self.velocity;

        self.rotational_velocity += self.rotational_acceleration;
        self.rotation += self.rotational_velocity;

        self.acceleration = DVec2::ZERO;
        self.rotational_acceleration = 0.0;
    }

    /// Damps velocity by the body's configured factor.
    pub fn apply_velocity_damping(&mut self) {
        self.apply_velocity_damping_by(self.tuning.velocity_damping);
    }

    /// Multiplies velocity by `factor`, snapping to rest below the minimum
    /// velocity.
    ///
    /// A body already at rest is left bit-exact.
    pub fn apply_velocity_damping_by(&mut self, factor: f64) {
        if self.speed == 0.0 {
            return;
        }

        self.velocity *= factor;
        self.refresh_speed();
        if self.speed < self.tuning.min_velocity {
            self.velocity = DVec2::ZERO;
            self.speed = 0.0;
        }
    }

    /// Damps rotational velocity by the body's configured factor.
    pub fn apply_rotational_damping(&mut self) {
        self.apply_rotational_damping_by(self.tuning.rotational_damping);
    }

    /// Multiplies rotational velocity by `factor`, snapping to rest below
    /// the minimum rotational velocity.
    pub fn apply_rotational_damping_by(&mut self, factor: f64) {
        if self.rotational_velocity == 0.0 {
            return;
        }

        self.rotational_velocity *= factor;
        if self.rotational_velocity.abs() < self.tuning.min_rotational_velocity {
            self.rotational_velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Body, Bounds, EntityTag, MIN_VELOCITY};
    use glam::DVec2;

    fn puck() -> Body {
        Body::new(0, 0, Bounds::Circle { radius: 1.0 }, EntityTag("puck")).expect("valid bounds")
    }

    #[test]
    fn integration_records_last_valid_position() {
        let mut body = puck();
        body.set_velocity(1.0, 0.0);
        body.advance_one_tick();
        body.advance_one_tick();
        assert_eq!(body.last_valid_position(), DVec2::new(1.0, 0.0));
        assert_eq!(body.position(), DVec2::new(2.0, 0.0));
    }

    #[test]
    fn acceleration_is_consumed_once() {
        let mut body = puck();
        body.accelerate_forward(2.0);
        body.advance_one_tick();
        let after_first = body.velocity();
        body.advance_one_tick();
        assert_eq!(body.velocity(), after_first);
        assert_eq!(body.acceleration(), DVec2::ZERO);
        assert!((body.speed() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rotational_acceleration_turns_body() {
        let mut body = puck();
        let start = body.rotation();
        body.rotational_acceleration = 0.1;
        body.advance_one_tick();
        assert_eq!(body.rotational_velocity(), 0.1);
        assert_eq!(body.rotation(), start + 0.1);
        assert_eq!(body.rotational_acceleration(), 0.0);
    }

    #[test]
    fn damping_keeps_speed_consistent() {
        let mut body = puck();
        body.set_velocity(3.0, 4.0);
        body.apply_velocity_damping_by(0.5);
        assert_eq!(body.velocity(), DVec2::new(1.5, 2.0));
        assert_eq!(body.speed(), 2.5);
    }

    #[test]
    fn default_damping_eventually_rests() {
        let mut body = puck();
        body.set_velocity(1.0, -1.0);
        let mut ticks = 0;
        while body.speed() > 0.0 {
            body.apply_velocity_damping();
            ticks += 1;
            assert!(ticks < 10_000, "velocity never reached rest");
        }
        assert_eq!(body.velocity(), DVec2::ZERO);
        assert!(ticks > 1);
        assert!(MIN_VELOCITY > 0.0);
    }

    #[test]
    fn rotational_damping_snaps_small_spin() {
        let mut body = puck();
        body.set_rotational_velocity(-1e-5);
        body.apply_rotational_damping();
        assert_eq!(body.rotational_velocity(), 0.0);
    }
}
