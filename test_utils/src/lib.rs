//! Utility helpers for tests.
//!
//! Builds bodies from their collision centers rather than their top-left
//! corners, and provides a probe entity that records what the registry
//! does to it.
pub mod conversions;
pub mod physics;
pub mod probe;

pub use physics::{circle, rect, Center, HalfExtents};
pub use probe::{Probe, ProbeLog};
