//! Per-body damping and rest thresholds.
//!
//! Every [`Body`](crate::Body) starts from [`Tuning::default`], built from
//! the values in [`crate::constants`]. Entity kinds that drift more or less
//! freely override individual fields, and the demo binary can load a whole
//! record from JSON.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgument, TuningError};
use crate::{
    DEFAULT_ROTATIONAL_DAMPING, DEFAULT_VELOCITY_DAMPING, MIN_ROTATIONAL_VELOCITY, MIN_VELOCITY,
};

/// Damping factors and rest thresholds for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Multiplier applied to velocity by default damping, in `(0, 1]`.
    pub velocity_damping: f64,
    /// Multiplier applied to rotational velocity by default damping, in `(0, 1]`.
    pub rotational_damping: f64,
    /// Speed below which damping snaps velocity to zero.
    pub min_velocity: f64,
    /// Rotational speed below which damping snaps rotation to rest.
    pub min_rotational_velocity: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            velocity_damping: DEFAULT_VELOCITY_DAMPING,
            rotational_damping: DEFAULT_ROTATIONAL_DAMPING,
            min_velocity: MIN_VELOCITY,
            min_rotational_velocity: MIN_ROTATIONAL_VELOCITY,
        }
    }
}

impl Tuning {
    /// Checks every field against its allowed range.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::DampingOutOfRange`] for a factor outside
    /// `(0, 1]` and [`InvalidArgument::ThresholdOutOfRange`] for a negative or
    /// non-finite threshold.
    pub fn validate(self) -> Result<Self, InvalidArgument> {
        check_damping("velocity_damping", self.velocity_damping)?;
        check_damping("rotational_damping", self.rotational_damping)?;
        check_threshold("min_velocity", self.min_velocity)?;
        check_threshold("min_rotational_velocity", self.min_rotational_velocity)?;
        Ok(self)
    }

    /// Parses and validates a JSON tuning document.
    ///
    /// Missing keys fall back to the defaults.
    ///
    /// # Examples
    /// ```
    /// use banana::Tuning;
    /// let tuning = Tuning::from_json(r#"{ "velocity_damping": 0.9 }"#).unwrap();
    /// assert_eq!(tuning.velocity_damping, 0.9);
    /// assert_eq!(tuning.rotational_damping, Tuning::default().rotational_damping);
    /// ```
    ///
    /// # Errors
    /// Returns [`TuningError::Parse`] for malformed JSON or unknown keys and
    /// [`TuningError::Invalid`] for out-of-range values.
    pub fn from_json(source: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(source)?;
        Ok(tuning.validate()?)
    }

    /// Reads a JSON tuning document from disk.
    ///
    /// # Errors
    /// Returns [`TuningError::Io`] when the file cannot be read, otherwise
    /// the errors of [`Tuning::from_json`].
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}

pub(crate) fn check_damping(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(InvalidArgument::DampingOutOfRange { name, value })
    }
}

pub(crate) fn check_threshold(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidArgument::ThresholdOutOfRange { name, value })
    }
}
