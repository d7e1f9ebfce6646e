//! Probe point records and per-slot status flags.

use serde::{Deserialize, Serialize};

/// Maximum number of leveling probe points a machine profile may define.
///
/// Records live in a fixed inline array of this size; there is no dynamic
/// growth. Store writes addressing a slot at or beyond this bound are
/// rejected with an error.
pub const MAX_PROBE_POINTS: usize = 32;

/// Status flags for one probe point slot.
///
/// The flags are independent: `xy_set` and `z_set` track which halves of the
/// record have been written, `xy_corrected` records that the Z reading was
/// itself adjusted for prior XY-level compensation, and `probe_error` marks
/// a failed measurement. `xy_corrected` and `probe_error` always reflect the
/// most recent Z write for the slot, never an earlier one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointStatus {
    /// X/Y coordinates have been recorded
    pub xy_set: bool,
    /// Z height has been recorded
    pub z_set: bool,
    /// The Z reading was adjusted for prior XY-level compensation
    pub xy_corrected: bool,
    /// The measurement failed or was invalid
    pub probe_error: bool,
}

impl PointStatus {
    /// Nothing recorded yet
    pub const UNSET: PointStatus = PointStatus {
        xy_set: false,
        z_set: false,
        xy_corrected: false,
        probe_error: false,
    };

    /// Both coordinates and height have been recorded
    #[inline]
    pub fn fully_probed(&self) -> bool {
        self.xy_set && self.z_set
    }

    /// Fully probed and the measurement did not fail
    #[inline]
    pub fn trusted(&self) -> bool {
        self.fully_probed() && !self.probe_error
    }
}

/// One measured (x, y, z) probe sample.
///
/// `x`/`y` are meaningful only when `status.xy_set`; `z` only when
/// `status.z_set` and `status.probe_error` is clear. Fresh records carry
/// `z = 0.0` so diagnostic reports over unset slots stay tidy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbePoint {
    /// Planar X coordinate
    pub x: f32,
    /// Planar Y coordinate
    pub y: f32,
    /// Measured height
    pub z: f32,
    /// Per-slot status flags
    pub status: PointStatus,
}

impl ProbePoint {
    /// An unset record
    pub const UNSET: ProbePoint = ProbePoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        status: PointStatus::UNSET,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_status() {
        let status = PointStatus::UNSET;
        assert!(!status.fully_probed());
        assert!(!status.trusted());
    }

    #[test]
    fn test_fully_probed_requires_both_halves() {
        let mut status = PointStatus::UNSET;
        status.xy_set = true;
        assert!(!status.fully_probed());

        status.z_set = true;
        assert!(status.fully_probed());
        assert!(status.trusted());
    }

    #[test]
    fn test_probe_error_breaks_trust() {
        let status = PointStatus {
            xy_set: true,
            z_set: true,
            xy_corrected: false,
            probe_error: true,
        };
        assert!(status.fully_probed());
        assert!(!status.trusted());
    }
}
