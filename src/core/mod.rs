//! Core types for the bed compensation engine.
//!
//! - [`ProbePoint`]: one measured (x, y, z) sample with status flags
//! - [`PointStatus`]: independent per-slot flags
//! - [`MAX_PROBE_POINTS`]: fixed store capacity

mod point;

pub use point::{PointStatus, ProbePoint, MAX_PROBE_POINTS};
