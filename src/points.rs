//! Fixed-capacity probe point store.
//!
//! All mutation of probe coordinates and status goes through
//! [`ProbePointSet`]. Records are filled in index order by the probing
//! sequence: XY for a slot first, then the measured Z for the same slot.
//! The store never allocates; every record lives inline.

use serde::{Deserialize, Serialize};

use crate::core::{ProbePoint, MAX_PROBE_POINTS};
use crate::error::{LevelingError, Result};

/// Fixed-capacity store of measured probe points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProbePointSet {
    points: [ProbePoint; MAX_PROBE_POINTS],
}

impl ProbePointSet {
    /// Create an empty store: all records unset, heights zeroed.
    pub fn new() -> Self {
        Self {
            points: [ProbePoint::UNSET; MAX_PROBE_POINTS],
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut ProbePoint> {
        self.points
            .get_mut(index)
            .ok_or(LevelingError::IndexOutOfRange {
                index,
                max: MAX_PROBE_POINTS,
            })
    }

    /// Record the X and Y coordinates of a probe point.
    pub fn set_xy(&mut self, index: usize, x: f32, y: f32) -> Result<()> {
        let point = self.slot_mut(index)?;
        point.x = x;
        point.y = y;
        point.status.xy_set = true;
        Ok(())
    }

    /// Record the Z coordinate of a probe point.
    ///
    /// `was_xy_corrected` and `was_error` overwrite the corresponding flags;
    /// they describe only this measurement, not any earlier one for the slot.
    pub fn set_z(
        &mut self,
        index: usize,
        z: f32,
        was_xy_corrected: bool,
        was_error: bool,
    ) -> Result<()> {
        let point = self.slot_mut(index)?;
        point.z = z;
        point.status.z_set = true;
        point.status.xy_corrected = was_xy_corrected;
        point.status.probe_error = was_error;
        Ok(())
    }

    /// Number of probe points currently defined: the length of the longest
    /// prefix in which every record has both XY and Z recorded.
    pub fn number_of_points(&self) -> usize {
        self.points
            .iter()
            .position(|p| !p.status.fully_probed())
            .unwrap_or(MAX_PROBE_POINTS)
    }

    /// Clear the recorded heights so old measurements are not reused.
    ///
    /// Coordinates and their `xy_set` flags survive, so a re-probe can reuse
    /// the same positions.
    pub fn clear_heights(&mut self) {
        for point in &mut self.points {
            point.status.z_set = false;
        }
    }

    /// Check whether the first `num_points` records are fully probed with no
    /// measurement failures. A count beyond the store capacity can never be
    /// good.
    pub fn good_points(&self, num_points: usize) -> bool {
        match self.points.get(..num_points) {
            Some(prefix) => prefix.iter().all(|p| p.status.trusted()),
            None => false,
        }
    }

    /// Check that the probe points are laid out clockwise starting near
    /// minimum X and Y, the arrangement the bilinear model's corner indexing
    /// assumes.
    pub fn good_ordering(&self, num_points: usize) -> bool {
        let p = &self.points;
        if num_points >= 2 && p[1].y <= p[0].y {
            return false;
        }
        if num_points >= 3 && p[2].x <= p[1].x {
            return false;
        }
        if num_points >= 4 && p[3].y >= p[2].y {
            return false;
        }
        if num_points >= 4 && p[0].x >= p[3].x {
            return false;
        }
        true
    }

    /// Read-only access to a record.
    #[inline]
    pub fn point(&self, index: usize) -> Option<&ProbePoint> {
        self.points.get(index)
    }

    /// The recorded (x, y) position of a slot, if one has been set.
    pub fn position(&self, index: usize) -> Option<(f32, f32)> {
        let point = self.points.get(index)?;
        point.status.xy_set.then_some((point.x, point.y))
    }

    /// The trusted height of a slot: `Some` only when the record is fully
    /// probed and the measurement did not fail.
    pub fn height(&self, index: usize) -> Option<f32> {
        let point = self.points.get(index)?;
        point.status.trusted().then_some(point.z)
    }

    /// Whether the last Z write for a slot was adjusted for prior XY-level
    /// compensation.
    pub fn was_corrected(&self, index: usize) -> bool {
        self.points
            .get(index)
            .map_or(false, |p| p.status.xy_corrected)
    }

    /// All records, including unset slots.
    #[inline]
    pub(crate) fn records(&self) -> &[ProbePoint; MAX_PROBE_POINTS] {
        &self.points
    }
}

impl Default for ProbePointSet {
    fn default() -> Self {
        Self::new()
    }
}
