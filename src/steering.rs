//! Directed thrust and turning primitives.
//!
//! Every primitive only sets the pending accelerations or the heading; the
//! motion happens on the next [`Body::advance_one_tick`]. Thrust must be
//! re-issued every tick to be sustained.
use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::error::InvalidArgument;
use crate::vector_math::{heading_vector, vec_with_magnitude};
use crate::{Body, NORTH, SOUTH};

/// Turning direction for [`Body::turn_toward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Decreasing rotation.
    Clockwise,
    /// Increasing rotation.
    CounterClockwise,
}

impl Turn {
    /// `-1.0` for clockwise, `1.0` for counter-clockwise.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }
}

impl Body {
    /// Sets the pending acceleration to `force` along the current heading.
    pub fn accelerate_forward(&mut self, force: f64) {
        self.acceleration = heading_vector(self.rotation) * force;
    }

    /// Thrusts forward with `force` while keeping speed at or below
    /// `max_speed`.
    ///
    /// When the body already moves faster than `max_speed` its velocity is
    /// scaled back to exactly `max_speed`, heading preserved. Called every
    /// tick under thrust, this settles the body at cruising speed.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ForceExceedsMaxSpeed`] when
    /// `force > max_speed` and [`InvalidArgument::NonFiniteForce`] for a NaN
    /// or infinite force; the body is left untouched.
    pub fn move_forward_capped(
        &mut self,
        force: f64,
        max_speed: f64,
    ) -> Result<(), InvalidArgument> {
        check_force(force)?;
        if force > max_speed {
            return Err(InvalidArgument::ForceExceedsMaxSpeed { force, max_speed });
        }

        self.accelerate_forward(force);

        if self.speed > max_speed {
            let (x, y) = vec_with_magnitude(self.velocity.x, self.velocity.y, max_speed);
            self.velocity.x = x;
            self.velocity.y = y;
            self.refresh_speed();
        }
        Ok(())
    }

    /// Spins the body in `direction` with `force` until it reaches
    /// `max_rotational_speed`.
    ///
    /// Once the rotational speed exceeds the cap it is pinned to the cap in
    /// `direction` and no further acceleration is queued.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ForceExceedsMaxRotationalSpeed`] when
    /// `force > max_rotational_speed` and [`InvalidArgument::NonFiniteForce`]
    /// for a NaN or infinite force; the body is left untouched.
    pub fn turn_toward(
        &mut self,
        direction: Turn,
        max_rotational_speed: f64,
        force: f64,
    ) -> Result<(), InvalidArgument> {
        check_force(force)?;
        if force > max_rotational_speed {
            return Err(InvalidArgument::ForceExceedsMaxRotationalSpeed {
                force,
                max_rotational_speed,
            });
        }

        self.rotational_acceleration = force * direction.sign();

        if self.rotational_velocity.abs() > max_rotational_speed {
            self.rotational_velocity = max_rotational_speed * direction.sign();
            self.rotational_acceleration = 0.0;
        }
        Ok(())
    }

    /// Turns the body to face the point `(x, y)` immediately.
    ///
    /// The heading is `atan(dy / dx)` of the offset from the target to this
    /// body's center, rotated by `π` when the target lies on the negative-x
    /// side, so results fall in `(-π/2, 3π/2)`. A target straight above or
    /// below yields north or south; a target on the center leaves the
    /// heading unchanged.
    pub fn look_at_point(&mut self, x: f64, y: f64) {
        let center = self.center();
        self.face_offset(center.x - x, center.y - y);
    }

    /// Turns the body to face `other`'s center immediately.
    pub fn look_at(&mut self, other: &Self) {
        self.face_offset(self.x_distance_from(other), self.y_distance_from(other));
    }

    fn face_offset(&mut self, x_dis: f64, y_dis: f64) {
        if x_dis == 0.0 {
            if y_dis > 0.0 {
                self.rotation = NORTH;
            } else if y_dis < 0.0 {
                self.rotation = SOUTH;
            }
            return;
        }

        self.rotation = (y_dis / x_dis).atan();
        if x_dis > 0.0 {
            self.rotation += PI;
        }
    }
}

fn check_force(force: f64) -> Result<(), InvalidArgument> {
    if force.is_finite() {
        Ok(())
    } else {
        Err(InvalidArgument::NonFiniteForce { force })
    }
}

/// Uniformly random heading in `[0, 2π)` from the thread RNG.
#[must_use]
pub fn random_heading() -> f64 {
    random_heading_with(&mut rand::thread_rng())
}

/// Uniformly random heading in `[0, 2π)` from `rng`.
///
/// # Examples
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let heading = banana::random_heading_with(&mut StdRng::seed_from_u64(7));
/// assert!((0.0..std::f64::consts::TAU).contains(&heading));
/// ```
pub fn random_heading_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..TAU)
}
