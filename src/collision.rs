//! Narrow-phase overlap tests between rectangles and circles.
//!
//! Rectangles are axis aligned and centered on the body's center. Every
//! test takes a margin that inflates the bounds, which turns the overlap test
//! into a proximity test. Margins are used as given; callers pass values
//! `>= 0`.
use serde::Serialize;

use crate::{Body, Shape};

/// Outcome of a pairwise collision test.
///
/// The distances are `this.center - other.center`, so their signs tell a
/// collision response which way to push.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionResult {
    /// Whether the (margin-inflated) bounds overlap.
    pub colliding: bool,
    /// Signed center distance along x.
    pub x_distance: f64,
    /// Signed center distance along y.
    pub y_distance: f64,
}

impl CollisionResult {
    /// The same event seen from the other body.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            colliding: self.colliding,
            x_distance: -self.x_distance,
            y_distance: -self.y_distance,
        }
    }
}

impl Body {
    /// Center x distance from `other` (`self - other`).
    #[must_use]
    pub fn x_distance_from(&self, other: &Self) -> f64 {
        self.center().x - other.center().x
    }

    /// Center y distance from `other` (`self - other`).
    #[must_use]
    pub fn y_distance_from(&self, other: &Self) -> f64 {
        self.center().y - other.center().y
    }

    /// Squared distance between the two centers.
    #[must_use]
    pub fn squared_distance_from(&self, other: &Self) -> f64 {
        self.center().distance_squared(other.center())
    }

    /// Tests strict overlap with `other`.
    #[must_use]
    pub fn collides_with(&self, other: &Self) -> CollisionResult {
        self.test_collision(other, 0.0)
    }

    /// Tests overlap with `other` after inflating both bounds by `margin`.
    ///
    /// # Examples
    /// ```
    /// use banana::{Body, Bounds, EntityTag};
    /// let wall = Bounds::Rectangle { width: 10.0, height: 10.0 };
    /// let a = Body::new(0, 0, wall, EntityTag("wall")).unwrap();
    /// let b = Body::new(12, 0, wall, EntityTag("wall")).unwrap();
    /// assert!(!a.collides_with(&b).colliding);
    /// assert!(!a.test_collision(&b, 1.0).colliding);
/// assert!(a.test_collision(&b, 2.0).colliding);
    /// ```
    #[must_use]
    pub fn test_collision(&self, other: &Self, margin: f64) -> CollisionResult {
        let x_dis = self.x_distance_from(other);
        let y_dis = self.y_distance_from(other);

        let colliding = match (self.shape(), other.shape()) {
            (Shape::Circle, Shape::Rectangle) => {
                circle_rectangle_overlap(self, other, margin, x_dis, y_dis)
            }
            (Shape::Rectangle, Shape::Circle) => {
                circle_rectangle_overlap(other, self, margin, x_dis, y_dis)
            }
            (Shape::Rectangle, Shape::Rectangle) => {
                let reach = self.bounds.half_extents() + other.bounds.half_extents() + margin;
                x_dis.abs() <= reach.x && y_dis.abs() <= reach.y
            }
            (Shape::Circle, Shape::Circle) => {
                let reach = self.bounds.radius() + other.bounds.radius() + margin;
                x_dis * x_dis + y_dis * y_dis <= reach * reach
            }
        };

        CollisionResult {
            colliding,
            x_distance: x_dis,
            y_distance: y_dis,
        }
    }

    /// Whether `other` lies within `range` of this body's bounds.
    #[must_use]
    pub fn in_range(&self, other: &Self, range: f64) -> bool {
        self.test_collision(other, range).colliding
    }
}

/// Tests a circle against a rectangle given their center distances.
///
/// Only the magnitudes of the distances matter, so they may be taken from
/// either body's point of view. The returned distances are passed through
/// unchanged.
#[must_use]
pub fn test_circle_rectangle(
    circle: &Body,
    rect: &Body,
    margin: f64,
    x_dis: f64,
    y_dis: f64,
) -> CollisionResult {
    CollisionResult {
        colliding: circle_rectangle_overlap(circle, rect, margin, x_dis, y_dis),
        x_distance: x_dis,
        y_distance: y_dis,
    }
}

fn circle_rectangle_overlap(
    circle: &Body,
    rect: &Body,
    margin: f64,
    x_dis: f64,
    y_dis: f64,
) -> bool {
    let x_abs = x_dis.abs();
    let y_abs = y_dis.abs();
    let radius = circle.bounds.radius();
    let inflated = rect.bounds.half_extents() + margin;

    // Too far along either axis to touch at all.
    if x_abs > inflated.x + radius || y_abs > inflated.y + radius {
        return false;
    }

    // Center sits within the rectangle's band on at least one axis.
    if x_abs <= inflated.x || y_abs <= inflated.y {
        return true;
    }

    let corner_x = x_abs - inflated.x;
    let corner_y = y_abs - inflated.y;
    let reach = radius + margin;
    corner_x * corner_x + corner_y * corner_y <= reach * reach
}
