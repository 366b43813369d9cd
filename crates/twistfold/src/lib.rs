//! Twist-fold crease patterns and periodic planar tilings.
//!
//! Purpose
//! - Generate the crease pattern of an origami twist tile inscribed in a
//!   polygon: vertices, creases, and mountain/valley assignments, grouped
//!   into one pleat per tile edge.
//! - Assemble Archimedean tilings from named lattice-patch descriptors and
//!   replicate them over a finite grid.
//!
//! The crate is pure synchronous computation over owned value types. Drawing,
//! viewport placement, and interaction belong to callers; all coordinates are
//! emitted in one shared plane with no implicit screen offset.

pub mod error;
pub mod geom;
pub mod tiling;
pub mod twist;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Short aliases for the planar (z = 0) nalgebra types used throughout.
pub use nalgebra::{Point3 as Pt3, Rotation3 as Rot3, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom::{unit, Line, Polygon, Segment};
    pub use crate::tiling::{patch_names, LatticePatch, Tiling, TilingCfg};
    pub use crate::twist::{Assignment, Crease, TwistParams, TwistTile};
    pub use nalgebra::{Point3 as Pt3, Rotation3 as Rot3, Vector3 as Vec3};
}
