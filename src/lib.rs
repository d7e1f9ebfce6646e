//! # Samatala: Bed Surface Compensation
//!
//! A bounded-capacity calibration-point store and surface-fitting engine for
//! motion-control firmware. The engine records a fixed set of measured
//! (x, y, z) probe samples, validates their spatial arrangement, fits a
//! tilted-plane (3 points) or bilinear ruled-surface (4 points) model, and
//! answers height-correction queries for arbitrary (x, y) positions during
//! subsequent motion.
//!
//! ## Features
//!
//! - **Fixed-capacity store**: probe records live in an inline array; no
//!   allocation on the probing or query path
//! - **Two surface models**: tilted plane and bilinear ruled surface with
//!   exact closed-form coefficient derivation
//! - **Ordering validation**: fits are gated on the clockwise,
//!   min-corner-first probe layout the bilinear corner indexing assumes
//! - **Diagnostics**: formatted probe-height reports with mean and
//!   population deviation
//!
//! ## Quick Start
//!
//! ```rust
//! use samatala::{BedCompensation, LogAdvisorySink};
//!
//! let mut bed = BedCompensation::new();
//!
//! // Probe three points, clockwise from the minimum-X/Y corner
//! let heights = [(10.0, 10.0, 0.02), (10.0, 180.0, 0.05), (180.0, 180.0, -0.01)];
//! for (i, (x, y, z)) in heights.iter().enumerate() {
//!     bed.points_mut().set_xy(i, *x, *y)?;
//!     bed.points_mut().set_z(i, *z, false, false)?;
//! }
//!
//! assert!(bed.points().good_points(3));
//! let summary = bed.fit(3, &mut LogAdvisorySink)?;
//! println!("{}", summary);
//!
//! // Height correction for a motion target
//! let error = bed.interpolated_height_error(95.0, 95.0);
//! assert!(error.is_finite());
//! # samatala::Result::Ok(())
//! ```
//!
//! ## Ownership model
//!
//! The engine is owned and driven by a single control context; it provides
//! no internal locking. Every operation is a bounded in-memory computation
//! with no I/O and no suspension point.

pub mod core;
pub mod error;
pub mod fit;
pub mod points;
pub mod report;

mod compensation;

pub use crate::core::{PointStatus, ProbePoint, MAX_PROBE_POINTS};
pub use compensation::{AdvisorySink, BedCompensation, LogAdvisorySink};
pub use error::{LevelingError, Result};
pub use fit::SurfaceModel;
pub use points::ProbePointSet;
