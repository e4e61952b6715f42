#![cfg_attr(docsrs, feature(doc_cfg))]
//! Per-entity kinematics and collision kernel for the Banana arcade shooter.
//!
//! Every movable game object embeds a [`Body`]: integer-spawned pose,
//! velocity and rotation integrated once per tick, multiplicative damping
//! toward an exact rest, capped thrust and turning, and rectangle/circle
//! overlap tests. A [`Registry`] owns entity kinds implementing
//! [`Behaviour`] and drives them tick by tick.
pub mod body;
pub mod collision;
pub mod constants;
pub mod error;
pub mod integrator;
pub mod logging;
pub mod registry;
pub mod steering;
pub mod tuning;
pub mod vector_math;
pub mod viewport;
pub use constants::*;

// Re-export commonly used items
pub use body::{Body, Bounds, EntityTag, Shape};
pub use collision::{test_circle_rectangle, CollisionResult};
pub use error::{InvalidArgument, TuningError};
pub use logging::init as init_logging;
pub use registry::{Behaviour, EntityId, Registry};
pub use steering::{random_heading, random_heading_with, Turn};
pub use tuning::Tuning;
pub use vector_math::{heading_vector, vec_mag, vec_with_magnitude};
pub use viewport::Viewport;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use banana::prelude::*;
    //! ```

    pub use crate::Behaviour;
    pub use crate::Body;
    pub use crate::Bounds;
    pub use crate::CollisionResult;
    pub use crate::EntityTag;
    pub use crate::InvalidArgument;
    pub use crate::Registry;
    pub use crate::Turn;
    pub use crate::Viewport;
    pub use glam::DVec2;
}
