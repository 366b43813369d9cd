//! Planar geometry primitives.
//!
//! Purpose
//! - Provide the small set of value types the crease generator and the
//!   tiling assembler are built on: checked normalization, parametric
//!   infinite lines, finite segments, and polygons with affine placement.
//!
//! Conventions
//! - Everything is computed in 3-space with z = 0 so cross products stay
//!   available for handedness tests; rotations are restricted to the z axis.
//! - nalgebra supplies the arithmetic (add, subtract, scale, dot, cross,
//!   angle-between); this module adds the operations that can fail.

mod line;
mod polygon;

pub use line::{Line, Segment};
pub use polygon::Polygon;

use crate::error::GeomError;
use crate::Vec3;

/// Numerical tolerance for geometric predicates (parallelism, degeneracy).
/// Tuned for coordinates around unit-to-hundreds scale; extreme scalings are
/// the caller's problem.
pub const EPS: f64 = 1e-9;

/// Unit-length copy of `v`.
///
/// Fails with [`GeomError::DegenerateVector`] when the magnitude is below
/// [`EPS`]. Callers must guard the degenerate case; there is no arbitrary
/// fallback direction.
pub fn unit(v: Vec3<f64>) -> Result<Vec3<f64>, GeomError> {
    let norm = v.norm();
    if !norm.is_finite() || norm < EPS {
        return Err(GeomError::DegenerateVector);
    }
    Ok(v / norm)
}

#[cfg(test)]
mod tests;
