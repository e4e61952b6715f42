//! Kinematic state shared by every movable entity.
//!
//! A [`Body`] owns only numbers: pose, bounding geometry, motion, tuning and
//! the two per-entity flags. Behaviour lives in the entity kinds that embed
//! it (see [`crate::registry::Behaviour`]); the integrator, steering,
//! collision and viewport modules add methods to `Body`.
use std::fmt;

use glam::DVec2;
use serde::Serialize;

use crate::error::{check_extent, InvalidArgument};
use crate::tuning::{check_damping, check_threshold, Tuning};
use crate::vector_math::vec_mag;
use crate::NORTH;

/// Collision shape of a body. Fixed for the body's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle.
    Circle,
}

/// Bounding geometry used for collision tests.
///
/// May differ from the render extents so a hitbox can be tighter than its
/// sprite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Bounds {
    /// Axis-aligned hitbox.
    Rectangle {
        /// Full hitbox width.
        width: f64,
        /// Full hitbox height.
        height: f64,
    },
    /// Circular hitbox.
    Circle {
        /// Hitbox radius.
        radius: f64,
    },
}

impl Bounds {
    /// Shape kind of these bounds.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Rectangle { .. } => Shape::Rectangle,
            Self::Circle { .. } => Shape::Circle,
        }
    }

    /// Half width and half height of a rectangle, or the radius on both axes
    /// for a circle.
    #[must_use]
    pub fn half_extents(&self) -> DVec2 {
        match *self {
            Self::Rectangle { width, height } => DVec2::new(width / 2.0, height / 2.0),
            Self::Circle { radius } => DVec2::splat(radius),
        }
    }

    /// Circle radius, or `0.0` for rectangles.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        match *self {
            Self::Circle { radius } => radius,
            Self::Rectangle { .. } => 0.0,
        }
    }

    fn validate(self) -> Result<Self, InvalidArgument> {
        match self {
            Self::Rectangle { width, height } => {
                check_extent("bounding width", width)?;
                check_extent("bounding height", height)?;
            }
            Self::Circle { radius } => {
                check_extent("bounding radius", radius)?;
            }
        }
        Ok(self)
    }
}

/// Entity-type tag naming the kind of game object a body belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityTag(pub &'static str);

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Kinematic state of one entity.
///
/// Position is the top-left reference corner; [`Body::center`] adds half
/// the render extents. Accelerations are transient: they hold one tick's
/// impulse and are zeroed by [`Body::advance_one_tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) bounds: Bounds,
    tag: EntityTag,
    pub(crate) position: DVec2,
    size: DVec2,
    spawn: DVec2,
    pub(crate) last_valid: DVec2,
    pub(crate) velocity: DVec2,
    pub(crate) speed: f64,
    pub(crate) acceleration: DVec2,
    pub(crate) rotation: f64,
    pub(crate) rotational_velocity: f64,
    pub(crate) rotational_acceleration: f64,
    pub(crate) tuning: Tuning,
    collision_checked: bool,
    done: bool,
}

impl Body {
    /// Creates a body at rest at `(x, y)`, facing north.
    ///
    /// The render extents default to the bounding box of `bounds` and the
    /// spawn point to `(x, y)`.
    ///
    /// # Examples
    /// ```
    /// use banana::{Body, Bounds, EntityTag};
    /// let body = Body::new(10, 20, Bounds::Circle { radius: 4.0 }, EntityTag("mine")).unwrap();
    /// assert_eq!(body.center().x, 14.0);
    /// assert_eq!(body.center().y, 24.0);
    /// ```
    ///
    /// # Errors
    /// Returns [`InvalidArgument::NegativeExtent`] if any bounding extent is
    /// negative or not finite.
    pub fn new(x: i32, y: i32, bounds: Bounds, tag: EntityTag) -> Result<Self, InvalidArgument> {
        let checked = bounds.validate()?;
        let position = DVec2::new(f64::from(x), f64::from(y));
        Ok(Self {
            bounds: checked,
            tag,
            position,
            size: checked.half_extents() * 2.0,
            spawn: position,
            last_valid: position,
            velocity: DVec2::ZERO,
            speed: 0.0,
            acceleration: DVec2::ZERO,
            rotation: NORTH,
            rotational_velocity: 0.0,
            rotational_acceleration: 0.0,
            tuning: Tuning::default(),
            collision_checked: false,
            done: false,
        })
    }

    /// Sets the render extents, which position the center.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::NegativeExtent`] for a negative or
    /// non-finite extent.
    pub fn with_size(mut self, width: f64, height: f64) -> Result<Self, InvalidArgument> {
        self.size = DVec2::new(check_extent("width", width)?, check_extent("height", height)?);
        Ok(self)
    }

    /// Overrides the spawn point used by [`Body::respawn`].
    #[must_use]
    pub fn with_spawn_point(mut self, x: i32, y: i32) -> Self {
        self.spawn = DVec2::new(f64::from(x), f64::from(y));
        self
    }

    /// Replaces the damping factors and rest thresholds.
    ///
    /// # Errors
    /// Propagates [`Tuning::validate`] failures.
    pub fn with_tuning(mut self, tuning: Tuning) -> Result<Self, InvalidArgument> {
        self.tuning = tuning.validate()?;
        Ok(self)
    }

    /// Shape kind of the bounding geometry.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.bounds.shape()
    }

    /// Bounding geometry.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Entity-type tag given at construction.
    #[must_use]
    pub const fn tag(&self) -> EntityTag {
        self.tag
    }

    /// Top-left reference corner.
    #[must_use]
    pub const fn position(&self) -> DVec2 {
        self.position
    }

    /// Moves the reference corner without touching velocity.
    pub const fn set_position(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }

    /// Render width and height.
    #[must_use]
    pub const fn size(&self) -> DVec2 {
        self.size
    }

    /// Position offset by half the render extents.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.position + self.size / 2.0
    }

    /// Where [`Body::respawn`] puts the body back.
    #[must_use]
    pub const fn spawn_point(&self) -> DVec2 {
        self.spawn
    }

    /// Position recorded at the start of the latest integration step.
    #[must_use]
    pub const fn last_valid_position(&self) -> DVec2 {
        self.last_valid
    }

    /// Undoes the latest position change, keeping velocity.
    ///
    /// Used by collision responses that refuse a move, such as walls.
    pub const fn revert_to_last_valid(&mut self) {
        self.position = self.last_valid;
    }

    /// Velocity in units per tick.
    #[must_use]
    pub const fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Replaces the velocity and refreshes the cached speed.
    pub fn set_velocity(&mut self, x: f64, y: f64) {
        self.velocity = DVec2::new(x, y);
        self.refresh_speed();
    }

    /// Cached magnitude of [`Body::velocity`].
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Pending acceleration for the next integration step.
    #[must_use]
    pub const fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    /// Heading in radians.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the heading directly, bypassing rotational velocity.
    pub const fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Rotational velocity in radians per tick.
    #[must_use]
    pub const fn rotational_velocity(&self) -> f64 {
        self.rotational_velocity
    }

    /// Replaces the rotational velocity.
    pub const fn set_rotational_velocity(&mut self, rotational_velocity: f64) {
        self.rotational_velocity = rotational_velocity;
    }

    /// Pending rotational acceleration for the next integration step.
    #[must_use]
    pub const fn rotational_acceleration(&self) -> f64 {
        self.rotational_acceleration
    }

    /// Damping factors and rest thresholds in use.
    #[must_use]
    pub const fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Changes the default velocity damping factor.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::DampingOutOfRange`] outside `(0, 1]`.
    pub fn set_velocity_damping(&mut self, factor: f64) -> Result<(), InvalidArgument> {
        self.tuning.velocity_damping = check_damping("velocity_damping", factor)?;
        Ok(())
    }

    /// Changes the default rotational damping factor.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::DampingOutOfRange`] outside `(0, 1]`.
    pub fn set_rotational_damping(&mut self, factor: f64) -> Result<(), InvalidArgument> {
        self.tuning.rotational_damping = check_damping("rotational_damping", factor)?;
        Ok(())
    }

    /// Changes the speed below which velocity damping snaps to rest.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ThresholdOutOfRange`] for a negative or
    /// non-finite threshold.
    pub fn set_min_velocity(&mut self, threshold: f64) -> Result<(), InvalidArgument> {
        self.tuning.min_velocity = check_threshold("min_velocity", threshold)?;
        Ok(())
    }

    /// Changes the spin below which rotational damping snaps to rest.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ThresholdOutOfRange`] for a negative or
    /// non-finite threshold.
    pub fn set_min_rotational_velocity(&mut self, threshold: f64) -> Result<(), InvalidArgument> {
        self.tuning.min_rotational_velocity =
            check_threshold("min_rotational_velocity", threshold)?;
        Ok(())
    }

    /// Whether the registry already processed this body's pairs this tick.
    #[must_use]
    pub const fn is_collision_checked(&self) -> bool {
        self.collision_checked
    }

    /// Sets the per-tick collision flag. Only the tick driver writes it.
    pub const fn set_collision_checked(&mut self, checked: bool) {
        self.collision_checked = checked;
    }

    /// Whether the body asked to be removed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Requests removal by the owning registry. Cannot be undone.
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Puts the body back at its spawn point, at rest and facing north.
    ///
    /// Leaves the done flag and bounding geometry as they are.
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.velocity = DVec2::ZERO;
        self.speed = 0.0;
        self.acceleration = DVec2::ZERO;
        self.rotational_velocity = 0.0;
        self.rotational_acceleration = 0.0;
        self.rotation = NORTH;
    }

    pub(crate) fn refresh_speed(&mut self) {
        self.speed = vec_mag(self.velocity.x, self.velocity.y);
    }
}
