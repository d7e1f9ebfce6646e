//! Error types for the bed compensation engine.

/// Result type alias
pub type Result<T> = std::result::Result<T, LevelingError>;

/// Bed leveling error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelingError {
    /// Probe points are not in the required clockwise, min-corner-first layout
    #[error("Probe points P0 to P{last} must be in clockwise order starting near minimum X and Y")]
    BadOrdering {
        /// Highest point index covered by the applicable ordering rules
        last: usize,
    },

    /// A fit was requested over a point count the engine cannot model
    #[error("Bed calibration: {0} points provided but only 3 and 4 points supported")]
    UnsupportedPointCount(usize),

    /// A store write addressed a slot beyond the fixed capacity
    #[error("Probe point index {index} out of range ({max} slots)")]
    IndexOutOfRange {
        /// Requested slot index
        index: usize,
        /// Store capacity
        max: usize,
    },
}
