//! Error types for the kinematics kernel.
//!
//! Steering and configuration calls reject bad inputs with
//! [`InvalidArgument`]. These are programmer errors in an entity kind's
//! setup, so callers usually propagate them rather than retry.
use thiserror::Error;

/// A precondition on a kernel call was violated.
///
/// The call that produced it did not mutate any state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidArgument {
    /// Thrust larger than the speed cap it is meant to reach.
    #[error("force ({force}) cannot be greater than max speed ({max_speed})")]
    ForceExceedsMaxSpeed {
        /// Requested thrust.
        force: f64,
        /// Requested speed cap.
        max_speed: f64,
    },
    /// Turning force larger than the rotational speed cap.
    #[error(
        "force ({force}) cannot be greater than max rotational speed ({max_rotational_speed})"
    )]
    ForceExceedsMaxRotationalSpeed {
        /// Requested turning force.
        force: f64,
        /// Requested rotational speed cap.
        max_rotational_speed: f64,
    },
    /// Thrust or turning force that is NaN or infinite.
    #[error("force must be finite, got {force}")]
    NonFiniteForce {
        /// Rejected force.
        force: f64,
    },
    /// A bounding or render extent was negative or not finite.
    #[error("{name} must be a finite, non-negative extent, got {value}")]
    NegativeExtent {
        /// Which extent was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A damping factor outside `(0, 1]`.
    #[error("{name} must lie in (0, 1], got {value}")]
    DampingOutOfRange {
        /// Which factor was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A rest threshold that is negative or not finite.
    #[error("{name} must be a finite, non-negative threshold, got {value}")]
    ThresholdOutOfRange {
        /// Which threshold was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Failure to load a [`Tuning`](crate::tuning::Tuning) record.
#[derive(Debug, Error)]
pub enum TuningError {
    /// The tuning file could not be read.
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    /// The tuning document is not valid JSON for a tuning record.
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    /// The tuning parsed but holds out-of-range values.
    #[error("invalid tuning: {0}")]
    Invalid(#[from] InvalidArgument),
}

/// Ensures `value` is a finite, non-negative extent.
pub(crate) fn check_extent(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidArgument::NegativeExtent { name, value })
    }
}
