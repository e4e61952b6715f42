//! Visibility against the camera rectangle.
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Body;

/// Camera rectangle in world coordinates, supplied by the renderer.
///
/// The game's camera is square; the query measures each axis separately so
/// it reads the same for a square camera and stays meaningful otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Viewport {
    /// Builds a square viewport of side `side` whose top-left corner is
    /// `(left, top)`.
    #[must_use]
    pub const fn square(left: f64, top: f64, side: f64) -> Self {
        Self {
            left,
            top,
            right: left + side,
            bottom: top + side,
        }
    }

    /// Distance from the center to each edge.
    #[must_use]
    pub fn render_distance(&self) -> DVec2 {
        DVec2::new(self.right - self.left, self.bottom - self.top) / 2.0
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left, self.top) + self.render_distance()
    }
}

impl Body {
    /// Whether any part of the body's render box lies inside `viewport`.
    ///
    /// A box touching the edge counts as on screen.
    ///
    /// # Examples
    /// ```
    /// use banana::{Body, Bounds, EntityTag, Viewport};
    /// let camera = Viewport::square(0.0, 0.0, 100.0);
    /// let star = Body::new(-10, 50, Bounds::Circle { radius: 5.0 }, EntityTag("star")).unwrap();
    /// assert!(star.is_on_screen(&camera));
    /// ```
    #[must_use]
    pub fn is_on_screen(&self, viewport: &Viewport) -> bool {
        let render_distance = viewport.render_distance();
        let reach = self.size() / 2.0 + render_distance;
        let excess = (viewport.center() - self.center()).abs() - reach;
        excess.x <= 0.0 && excess.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, EntityTag};

    fn tile(x: i32, y: i32) -> Body {
        Body::new(
            x,
            y,
            Bounds::Rectangle {
                width: 10.0,
                height: 10.0,
            },
            EntityTag("tile"),
        )
        .expect("valid bounds")
    }

    #[test]
    fn square_viewport_geometry() {
        let camera = Viewport::square(-50.0, 20.0, 100.0);
        assert_eq!(camera.render_distance(), DVec2::splat(50.0));
        assert_eq!(camera.center(), DVec2::new(0.0, 70.0));
    }

    #[test]
    fn far_body_is_off_screen() {
        let camera = Viewport::square(0.0, 0.0, 100.0);
        assert!(!tile(200, 50).is_on_screen(&camera));
        assert!(!tile(50, -30).is_on_screen(&camera));
        assert!(tile(50, 50).is_on_screen(&camera));
    }

    #[test]
    fn both_axes_must_overlap() {
        let camera = Viewport::square(0.0, 0.0, 100.0);
        assert!(!tile(50, 150).is_on_screen(&camera));
        assert!(!tile(150, 150).is_on_screen(&camera));
    }
}
