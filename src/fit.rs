//! Surface model fitting and evaluation.
//!
//! Two models are supported, chosen by the number of probe points: a tilted
//! plane through three points, and a bilinear ruled surface over four corner
//! points. The corner points for the bilinear interpolation are indexed:
//!
//! ```text
//!   ^  [1]      [2]
//!   |
//!   Y
//!   |
//!   |  [0]      [3]
//!      -----X---->
//! ```
//!
//! which is why fits are gated on the clockwise, min-corner-first probe
//! ordering ([`ProbePointSet::good_ordering`]).

use serde::{Deserialize, Serialize};

use crate::error::{LevelingError, Result};
use crate::points::ProbePointSet;

/// Fitted bed compensation model.
///
/// A model is durable once installed: it is replaced only by the next
/// successful fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SurfaceModel {
    /// No compensation active; queries return zero.
    #[default]
    None,
    /// Tilted plane: height-error(x, y) = `a_x`·x + `a_y`·y + `a_c`.
    Plane {
        /// X slope coefficient
        a_x: f32,
        /// Y slope coefficient
        a_y: f32,
        /// Constant offset
        a_c: f32,
    },
    /// Bilinear ruled surface. Only the inverse spans of the probed
    /// rectangle are stored; the four corner heights are read from the
    /// point set at query time.
    Bilinear {
        /// Inverse X span, `1 / (x[3] - x[0])`
        x_scale: f32,
        /// Inverse Y span, `1 / (y[1] - y[0])`
        y_scale: f32,
    },
}

impl SurfaceModel {
    /// Number of probe points the model was fitted over (0, 3 or 4).
    #[inline]
    pub fn point_count(&self) -> usize {
        match self {
            SurfaceModel::None => 0,
            SurfaceModel::Plane { .. } => 3,
            SurfaceModel::Bilinear { .. } => 4,
        }
    }

    /// Interpolated height error at (x, y).
    ///
    /// Plane evaluation ignores the point set; bilinear evaluation reads the
    /// four corner heights from it. The normalized bilinear coordinates are
    /// not clamped to [0, 1], so queries outside the probed rectangle
    /// extrapolate linearly.
    pub fn height_error(&self, points: &ProbePointSet, x: f32, y: f32) -> f32 {
        match *self {
            SurfaceModel::None => 0.0,
            SurfaceModel::Plane { a_x, a_y, a_c } => a_x * x + a_y * y + a_c,
            SurfaceModel::Bilinear { x_scale, y_scale } => {
                let p = points.records();
                let u = (x - p[0].x) * x_scale;
                let v = (y - p[0].y) * y_scale;
                (1.0 - u) * (1.0 - v) * p[0].z
                    + u * (1.0 - v) * p[3].z
                    + (1.0 - u) * v * p[1].z
                    + u * v * p[2].z
            }
        }
    }
}

/// Derive a compensation model from the first `num_points` records.
///
/// The ordering gate runs first; a violation names the highest point index
/// covered by the applicable rules. On any failure nothing is mutated, so a
/// previously installed model stays valid.
///
/// The plane construction is the standard plane through three points: the
/// cross product of two edge vectors gives the normal `(a, b, c)`, and the
/// stored coefficients are the normal and plane constant divided by `-c`.
/// That division is deliberately unguarded: three Z-collinear points produce
/// non-finite coefficients that propagate silently into queries.
pub fn fit_model(points: &ProbePointSet, num_points: usize) -> Result<SurfaceModel> {
    if !points.good_ordering(num_points) {
        return Err(LevelingError::BadOrdering {
            last: num_points.min(4) - 1,
        });
    }

    let p = points.records();
    match num_points {
        3 => {
            let x10 = p[1].x - p[0].x;
            let y10 = p[1].y - p[0].y;
            let z10 = p[1].z - p[0].z;
            let x20 = p[2].x - p[0].x;
            let y20 = p[2].y - p[0].y;
            let z20 = p[2].z - p[0].z;
            let a = y10 * z20 - z10 * y20;
            let b = z10 * x20 - x10 * z20;
            let c = x10 * y20 - y10 * x20;
            let d = -(p[1].x * a + p[1].y * b + p[1].z * c);
            Ok(SurfaceModel::Plane {
                a_x: -a / c,
                a_y: -b / c,
                a_c: -d / c,
            })
        }
        4 => Ok(SurfaceModel::Bilinear {
            x_scale: 1.0 / (p[3].x - p[0].x),
            y_scale: 1.0 / (p[1].y - p[0].y),
        }),
        n => Err(LevelingError::UnsupportedPointCount(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn probed_set(coords: &[(f32, f32, f32)]) -> ProbePointSet {
        let mut set = ProbePointSet::new();
        for (i, &(x, y, z)) in coords.iter().enumerate() {
            set.set_xy(i, x, y).unwrap();
            set.set_z(i, z, false, false).unwrap();
        }
        set
    }

    #[test]
    fn test_plane_fit_reproduces_fit_points() {
        let set = probed_set(&[(0.0, 0.0, 0.0), (0.0, 1.0, 2.0), (1.0, 1.0, 4.0)]);
        let model = fit_model(&set, 3).unwrap();

        assert_eq!(model.point_count(), 3);
        // The plane passes through all three fit points exactly
        assert_eq!(model.height_error(&set, 0.0, 0.0), 0.0);
        assert_relative_eq!(model.height_error(&set, 0.0, 1.0), 2.0, epsilon = 1e-6);
        assert_relative_eq!(model.height_error(&set, 1.0, 1.0), 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_plane_fit_coefficients() {
        // z = 0.1·x - 0.2·y + 0.05
        let plane = |x: f32, y: f32| 0.1 * x - 0.2 * y + 0.05;
        let set = probed_set(&[
            (10.0, 10.0, plane(10.0, 10.0)),
            (10.0, 90.0, plane(10.0, 90.0)),
            (90.0, 90.0, plane(90.0, 90.0)),
        ]);
        let model = fit_model(&set, 3).unwrap();

        match model {
            SurfaceModel::Plane { a_x, a_y, a_c } => {
                assert_relative_eq!(a_x, 0.1, epsilon = 1e-5);
                assert_relative_eq!(a_y, -0.2, epsilon = 1e-5);
                assert_relative_eq!(a_c, 0.05, epsilon = 1e-4);
            }
            other => panic!("expected plane, got {:?}", other),
        }
        assert_relative_eq!(
            model.height_error(&set, 42.0, 17.0),
            plane(42.0, 17.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_bilinear_fit_scales_and_corners() {
        let set = probed_set(&[
            (0.0, 0.0, 0.0),
            (0.0, 1.0, 1.0),
            (1.0, 1.0, 2.0),
            (1.0, 0.0, 1.0),
        ]);
        let model = fit_model(&set, 4).unwrap();

        assert_eq!(
            model,
            SurfaceModel::Bilinear {
                x_scale: 1.0,
                y_scale: 1.0,
            }
        );
        // Each corner reproduces its own height exactly
        assert_eq!(model.height_error(&set, 0.0, 0.0), 0.0);
        assert_eq!(model.height_error(&set, 0.0, 1.0), 1.0);
        assert_eq!(model.height_error(&set, 1.0, 1.0), 2.0);
        assert_eq!(model.height_error(&set, 1.0, 0.0), 1.0);
        // The centre blends all four corners equally
        assert_relative_eq!(model.height_error(&set, 0.5, 0.5), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bilinear_extrapolates_without_clamping() {
        // Ruled surface rising 1.0 per unit X, flat in Y
        let set = probed_set(&[
            (0.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (1.0, 1.0, 1.0),
            (1.0, 0.0, 1.0),
        ]);
        let model = fit_model(&set, 4).unwrap();

        assert_relative_eq!(model.height_error(&set, 2.0, 0.5), 2.0, epsilon = 1e-6);
        assert_relative_eq!(model.height_error(&set, -1.0, 0.5), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ordering_violation_names_point_range() {
        let set = probed_set(&[(0.0, 1.0, 0.0), (0.0, 0.5, 0.0), (1.0, 1.0, 0.0)]);
        let err = fit_model(&set, 3).unwrap_err();
        assert_eq!(err, LevelingError::BadOrdering { last: 2 });

        // With more than four points only the first four are constrained
        let err = fit_model(&set, 7).unwrap_err();
        assert_eq!(err, LevelingError::BadOrdering { last: 3 });
    }

    #[test]
    fn test_unsupported_point_counts() {
        let set = probed_set(&[
            (0.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 0.0),
        ]);
        assert_eq!(
            fit_model(&set, 2).unwrap_err(),
            LevelingError::UnsupportedPointCount(2)
        );
        assert_eq!(
            fit_model(&set, 0).unwrap_err(),
            LevelingError::UnsupportedPointCount(0)
        );
    }

    #[test]
    fn test_degenerate_plane_is_non_finite() {
        // Ordering holds but the three points are collinear in the plane,
        // so the cross product's Z component vanishes
        let set = probed_set(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (2.0, 2.0, 2.0)]);
        let model = fit_model(&set, 3).unwrap();

        match model {
            SurfaceModel::Plane { a_x, .. } => assert!(!a_x.is_finite()),
            other => panic!("expected plane, got {:?}", other),
        }
    }
}
