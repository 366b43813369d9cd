//! Crate-wide error type.
//!
//! Every failure is detected locally and returned as a value. Geometry code
//! never substitutes sentinel coordinates for a failed operation; a parallel
//! intersection propagates as [`GeomError::NoIntersection`] so downstream
//! vertex indices cannot silently corrupt.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// A caller-supplied parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// An edge or crease index does not exist on the target structure.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Attempted to normalize a vector of (near-)zero magnitude.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// The two lines are parallel or coincident.
    #[error("lines are parallel, no unique intersection")]
    NoIntersection,

    /// No lattice patch with the given name exists in the catalog.
    #[error("unknown lattice patch `{0}`")]
    UnknownPatch(String),

    /// A descriptor or input polygon cannot form valid geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
}
