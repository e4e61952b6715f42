//! Kinematic constants shared by every body.
//!
//! Angles use screen coordinates: `x` grows to the east and `y` grows down
//! the screen, so a heading of `π/2` points south and north sits at `3π/2`.
use std::f64::consts::{FRAC_PI_2, PI};

/// Heading a body faces after construction or respawn.
pub const NORTH: f64 = 3.0 * PI / 2.0;
/// Heading pointing down the screen.
pub const SOUTH: f64 = FRAC_PI_2;
/// Velocity multiplier applied by default velocity damping.
pub const DEFAULT_VELOCITY_DAMPING: f64 = 0.985;
/// Rotational velocity multiplier applied by default rotational damping.
pub const DEFAULT_ROTATIONAL_DAMPING: f64 = 0.92;
/// Slowest speed allowed before velocity snaps to zero.
pub const MIN_VELOCITY: f64 = 0.005;
/// Slowest rotational speed (0.005 degrees per tick) allowed before it snaps
/// to zero.
pub const MIN_ROTATIONAL_VELOCITY: f64 = 0.005 * PI / 180.0;
