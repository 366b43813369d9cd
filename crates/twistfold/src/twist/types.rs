//! Data types for crease patterns: fold directions, vertex/crease indices,
//! pleat groups, and the validated tile parameters.

use serde::{Deserialize, Serialize};

use crate::error::GeomError;

/// Fold direction assigned to a crease.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assignment {
    Mountain,
    Valley,
}

impl Assignment {
    /// The opposite fold direction.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Assignment::Mountain => Assignment::Valley,
            Assignment::Valley => Assignment::Mountain,
        }
    }
}

/// Index into a tile's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

/// A crease between two vertices of the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crease {
    pub a: VertexId,
    pub b: VertexId,
}

impl Crease {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            a: VertexId(a),
            b: VertexId(b),
        }
    }
}

/// The 3-crease group generated for one tile edge: two parallel pleat
/// creases plus the chord they pin down on the central polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pleat {
    /// Index of the tile edge this pleat emanates from.
    pub edge: usize,
}

impl Pleat {
    /// The pleat containing crease index `k`; creases are emitted in groups
    /// of 3 per tile edge.
    #[inline]
    pub fn containing(crease_index: usize) -> Self {
        Self {
            edge: crease_index / 3,
        }
    }

    /// Crease indices of this pleat in emission order: first pleat crease,
    /// second pleat crease, chord.
    #[inline]
    pub fn crease_indices(self) -> [usize; 3] {
        [self.edge * 3, self.edge * 3 + 1, self.edge * 3 + 2]
    }
}

/// Parameters of a twist tile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TwistParams {
    /// Segment ratio along each tile edge, strictly inside (0, 1).
    pub w: f64,
    /// Tilt angle of the twist, radians.
    pub tau: f64,
    /// Swap the mountain/valley parity of every pleat.
    pub reversed: bool,
}

impl TwistParams {
    /// Validated parameter set with the default parity.
    pub fn new(w: f64, tau: f64) -> Result<Self, GeomError> {
        Self {
            w,
            tau,
            reversed: false,
        }
        .validated()
    }

    /// Range-check without building anything.
    pub fn validated(self) -> Result<Self, GeomError> {
        if !self.w.is_finite() || self.w <= 0.0 || self.w >= 1.0 {
            return Err(GeomError::InvalidParameter {
                name: "w",
                reason: format!("{} is not strictly inside (0, 1)", self.w),
            });
        }
        if !self.tau.is_finite() {
            return Err(GeomError::InvalidParameter {
                name: "tau",
                reason: format!("{} is not finite", self.tau),
            });
        }
        Ok(self)
    }
}

impl Default for TwistParams {
    fn default() -> Self {
        Self {
            w: 0.25,
            tau: 120.0_f64.to_radians(),
            reversed: false,
        }
    }
}
