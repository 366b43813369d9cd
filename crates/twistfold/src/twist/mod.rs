//! Twist-tile crease patterns.
//!
//! Purpose
//! - Fit a twist-style fold to a polygon: scale the polygon up into the
//!   working tile, run pleat lines off every edge at tilt `tau`, intersect
//!   neighbouring pleats into the central polygon, and emit the crease list
//!   with its mountain/valley assignments.
//!
//! Derived data is rebuilt as one bundle; the only in-place mutation is the
//! pleat flip, which toggles exactly one 3-crease group.

mod build;
pub mod sample;
mod types;

pub use types::{Assignment, Crease, Pleat, TwistParams, VertexId};

use nalgebra::Point3;

use crate::error::GeomError;
use crate::geom::Polygon;

/// Fixed scale applied to the base polygon to obtain the working tile.
pub const TILE_SCALE: f64 = 3.0;

/// A single, centered twist tile and its crease pattern.
#[derive(Clone, Debug)]
pub struct TwistTile {
    params: TwistParams,
    tile_polygon: Polygon,
    central_polygon: Polygon,
    vertices: Vec<Point3<f64>>,
    creases: Vec<Crease>,
    assignments: Vec<Assignment>,
}

impl TwistTile {
    /// Build the crease pattern of `params` inscribed in `polygon`.
    ///
    /// The polygon is scaled by [`TILE_SCALE`] to form the working tile.
    /// Parameters are validated before any derived data is built; a
    /// degenerate polygon fails with [`GeomError::InvalidGeometry`].
    pub fn new(polygon: &Polygon, params: TwistParams) -> Result<Self, GeomError> {
        let params = params.validated()?;
        if polygon.is_degenerate() {
            return Err(GeomError::InvalidGeometry(
                "twist tile needs a polygon with at least 3 sides",
            ));
        }
        let mut tile_polygon = polygon.clone();
        tile_polygon.scale(TILE_SCALE);
        let (central_polygon, vertices) = build::build_pattern(&tile_polygon, &params)?;
        let (creases, assignments) =
            build::build_creases(tile_polygon.sides(), vertices.len(), params.reversed);
        Ok(Self {
            params,
            tile_polygon,
            central_polygon,
            vertices,
            creases,
            assignments,
        })
    }

    /// Rebuild the whole derived bundle for new parameters.
    ///
    /// Validation and construction happen on the side; `self` is only
    /// touched once everything has succeeded, so a failed rebuild leaves
    /// the previous pattern intact and partial state is never observable.
    /// Changing the polygon arity means constructing a fresh tile via
    /// [`TwistTile::new`], since the 3-creases-per-edge layout depends on it.
    pub fn rebuild(&mut self, params: TwistParams) -> Result<(), GeomError> {
        let params = params.validated()?;
        let (central_polygon, vertices) = build::build_pattern(&self.tile_polygon, &params)?;
        let (creases, assignments) =
            build::build_creases(self.tile_polygon.sides(), vertices.len(), params.reversed);
        self.params = params;
        self.central_polygon = central_polygon;
        self.vertices = vertices;
        self.creases = creases;
        self.assignments = assignments;
        Ok(())
    }

    /// Flip the fold direction of the pleat containing `crease_index`.
    ///
    /// All 3 creases of that pleat toggle together and no other group is
    /// touched; applying the same flip twice restores the original
    /// assignments.
    pub fn invert_pleat(&mut self, crease_index: usize) -> Result<(), GeomError> {
        if crease_index >= self.assignments.len() {
            return Err(GeomError::IndexOutOfRange {
                index: crease_index,
                len: self.assignments.len(),
            });
        }
        for k in Pleat::containing(crease_index).crease_indices() {
            self.assignments[k] = self.assignments[k].flipped();
        }
        Ok(())
    }

    /// Effective twist angle `|atan(w · tan τ)|` of the current parameters.
    pub fn alpha(&self) -> f64 {
        (self.params.w * self.params.tau.tan()).atan().abs()
    }

    /// Structural ceiling callers compare [`TwistTile::alpha`] against: the
    /// interior angle up to hexagons, the exterior angle beyond. Advisory
    /// only, nothing here enforces it.
    pub fn alpha_safe(&self) -> f64 {
        if self.tile_polygon.sides() <= 6 {
            self.tile_polygon.interior_angle()
        } else {
            self.tile_polygon.exterior_angle()
        }
    }

    #[inline]
    pub fn params(&self) -> TwistParams {
        self.params
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.tile_polygon.sides()
    }

    #[inline]
    pub fn tile_polygon(&self) -> &Polygon {
        &self.tile_polygon
    }

    #[inline]
    pub fn central_polygon(&self) -> &Polygon {
        &self.central_polygon
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn creases(&self) -> &[Crease] {
        &self.creases
    }

    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}

#[cfg(test)]
mod tests;
