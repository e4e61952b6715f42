//! Convenience constructors for bodies used in tests.

use banana::{Body, Bounds, EntityTag};

#[derive(Clone, Copy, Debug)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

impl Center {
    /// Create a new [`Center`].
    ///
    /// # Examples
    /// ```
    /// use test_utils::Center;
    /// let c = Center::new(1.0, 2.0);
    /// assert_eq!(c.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HalfExtents {
    pub x: f64,
    pub y: f64,
}

impl HalfExtents {
    /// Create new [`HalfExtents`].
    ///
    /// # Examples
    /// ```
    /// use test_utils::HalfExtents;
    /// let h = HalfExtents::new(5.0, 3.0);
    /// assert_eq!(h.y, 3.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle body whose center sits at `center`.
///
/// Render extents match the hitbox, so the center is exact.
///
/// # Panics
/// Panics if the half extents are negative.
///
/// # Examples
/// ```
/// use test_utils::rect;
/// let body = rect((9.0, 0.0), (5.0, 5.0));
/// assert_eq!(body.center().x, 9.0);
/// assert_eq!(body.bounds().half_extents().x, 5.0);
/// ```
pub fn rect<C, H>(center: C, half_extents: H) -> Body
where
    C: Into<Center>,
    H: Into<HalfExtents>,
{
    let center: Center = center.into();
    let half: HalfExtents = half_extents.into();
    let bounds = Bounds::Rectangle {
        width: half.x * 2.0,
        height: half.y * 2.0,
    };
    place(
        Body::new(0, 0, bounds, EntityTag("rect")).expect("valid rectangle bounds"),
        center,
    )
}

/// Circle body whose center sits at `center`.
///
/// # Panics
/// Panics if `radius` is negative.
///
/// # Examples
/// ```
/// use test_utils::circle;
/// let body = circle((8.0, 8.0), 2.0);
/// assert_eq!(body.center().y, 8.0);
/// ```
pub fn circle<C>(center: C, radius: f64) -> Body
where
    C: Into<Center>,
{
    let center: Center = center.into();
    place(
        Body::new(0, 0, Bounds::Circle { radius }, EntityTag("circle"))
            .expect("valid circle bounds"),
        center,
    )
}

fn place(mut body: Body, center: Center) -> Body {
    let half = body.size() / 2.0;
    body.set_position(center.x - half.x, center.y - half.y);
    body
}
