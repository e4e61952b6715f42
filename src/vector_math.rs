//! Basic vector math helper functions.
//! Small helpers for headings, magnitudes and rescaled vectors.
use glam::DVec2;

/// Returns the magnitude of a vector expressed by its components.
///
/// # Examples
/// ```
/// use banana::vector_math::vec_mag;
/// let magnitude = vec_mag(3.0, 4.0);
/// assert!((magnitude - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn vec_mag(component_x: f64, component_y: f64) -> f64 {
    component_x.hypot(component_y)
}

/// Returns the unit vector pointing along `rotation` (radians, 0 = east).
///
/// # Examples
/// ```
/// use banana::heading_vector;
/// let east = heading_vector(0.0);
/// assert!((east.x - 1.0).abs() < 1e-12);
/// assert!(east.y.abs() < 1e-12);
/// ```
#[must_use]
pub fn heading_vector(rotation: f64) -> DVec2 {
    DVec2::from_angle(rotation)
}

/// Rescales `(component_x, component_y)` so its length equals `magnitude`.
///
/// The direction is preserved. Zero or non-finite input yields
/// `(0.0, 0.0)` since it has no direction to keep.
///
/// # Examples
///
/// ```
/// use banana::vec_with_magnitude;
/// let (x, y) = vec_with_magnitude(6.0, 8.0, 5.0);
/// assert!((x - 3.0).abs() < 1e-12);
/// assert!((y - 4.0).abs() < 1e-12);
///
/// assert_eq!(vec_with_magnitude(0.0, 0.0, 5.0), (0.0, 0.0));
/// ```
#[must_use]
pub fn vec_with_magnitude(component_x: f64, component_y: f64, magnitude: f64) -> (f64, f64) {
    let vector = DVec2::new(component_x, component_y);
    if !vector.is_finite() {
        return (0.0, 0.0);
    }

    let scaled = vector.try_normalize().unwrap_or(DVec2::ZERO) * magnitude;
    (scaled.x, scaled.y)
}
