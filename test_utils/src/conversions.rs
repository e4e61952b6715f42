//! Conversion helpers for test geometry newtypes.
//! Centralises `From` implementations enabling literal usage in tests.

use crate::physics::{Center, HalfExtents};

macro_rules! impl_coords2_conversions {
    ($name:ident, $ty:ty) => {
        impl From<($ty, $ty)> for $name {
            fn from((x, y): ($ty, $ty)) -> Self {
                Self { x, y }
            }
        }
        impl From<$name> for ($ty, $ty) {
            fn from(coords: $name) -> Self {
                (coords.x, coords.y)
            }
        }
    };
}

impl_coords2_conversions!(Center, f64);
impl_coords2_conversions!(HalfExtents, f64);
