//! Bed compensation engine: probe point set, active model, advisory channel.

use std::fmt::Write;

use crate::error::Result;
use crate::fit::{fit_model, SurfaceModel};
use crate::points::ProbePointSet;

/// Receives one-line advisory messages from the compensation engine.
///
/// Advisories are non-fatal warnings; delivering, displaying or dropping
/// them is the sink's concern. Injecting the sink keeps the engine testable
/// without a live logging backend.
pub trait AdvisorySink {
    /// Deliver a single advisory line.
    fn advise(&mut self, message: &str);
}

/// Advisory sink that forwards to the `log` crate as warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAdvisorySink;

impl AdvisorySink for LogAdvisorySink {
    fn advise(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

const DEPRECATION_ADVISORY: &str = "3/4-point bed compensation is deprecated and will be \
     removed in a future firmware release. Use mesh bed compensation instead.";

/// Bed compensation engine owned by a single control context.
///
/// Owns the probe point store and the active surface model. Probing writes
/// go through [`points_mut`](Self::points_mut); a successful
/// [`fit`](Self::fit) installs a new model, and
/// [`interpolated_height_error`](Self::interpolated_height_error) evaluates
/// it for every subsequent motion target.
///
/// The engine provides no internal locking and no snapshot guarantee across
/// a set/fit sequence; the owning control loop serializes access.
#[derive(Clone, Debug, Default)]
pub struct BedCompensation {
    points: ProbePointSet,
    model: SurfaceModel,
}

impl BedCompensation {
    /// Create an engine with an empty point set and no active model.
    pub fn new() -> Self {
        Self {
            points: ProbePointSet::new(),
            model: SurfaceModel::None,
        }
    }

    /// Read-only access to the probe point store.
    #[inline]
    pub fn points(&self) -> &ProbePointSet {
        &self.points
    }

    /// Mutable access to the probe point store for the probing sequence.
    #[inline]
    pub fn points_mut(&mut self) -> &mut ProbePointSet {
        &mut self.points
    }

    /// The active model.
    #[inline]
    pub fn model(&self) -> &SurfaceModel {
        &self.model
    }

    /// Number of points the current compensation model was fitted over,
    /// zero when no model is active. Exposed for machine introspection.
    #[inline]
    pub fn compensation_point_count(&self) -> usize {
        self.model.point_count()
    }

    /// Fit a compensation model over the first `num_points` records.
    ///
    /// On success the new model replaces the previous one, a one-line
    /// deprecation advisory is pushed through `advisories`, and the returned
    /// summary lists each fitted point. On failure the previous model is
    /// left untouched and no advisory is emitted.
    pub fn fit(&mut self, num_points: usize, advisories: &mut dyn AdvisorySink) -> Result<String> {
        self.model = fit_model(&self.points, num_points)?;

        advisories.advise(DEPRECATION_ADVISORY);

        let mut summary = String::from("Bed equation fits points");
        for point in self.points.records().iter().take(num_points) {
            let _ = write!(summary, " [{:.1}, {:.1}, {:.3}]", point.x, point.y, point.z);
        }
        Ok(summary)
    }

    /// Interpolated height error at (x, y) under the active model.
    ///
    /// Returns zero when no compensation is active.
    #[inline]
    pub fn interpolated_height_error(&self, x: f32, y: f32) -> f32 {
        self.model.height_error(&self.points, x, y)
    }
}
