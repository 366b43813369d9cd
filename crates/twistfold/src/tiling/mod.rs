//! Periodic tilings assembled from lattice-patch descriptors.
//!
//! Purpose
//! - Turn a named vertex figure into concrete polygons: the ring fanning
//!   around one shared vertex, the translatable patch, and the patch
//!   replicated along the two lattice vectors over a finite grid.
//!
//! All placement happens in the shared plane around the origin; the grid,
//! and the display scale applied to every polygon, are caller configuration.

mod patches;

pub use patches::{find_patch, patch_names, patches, LatticePatch, PatchPolygon};

use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::error::GeomError;
use crate::geom::Polygon;
use crate::twist::{TwistParams, TwistTile};

/// Default uniform scale applied to assembled polygons.
pub const DISPLAY_SCALE: f64 = 20.0;

/// Assembly configuration: replication grid and display scale.
#[derive(Clone, Copy, Debug)]
pub struct TilingCfg {
    pub rows: usize,
    pub cols: usize,
    pub scale: f64,
}

impl Default for TilingCfg {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            scale: DISPLAY_SCALE,
        }
    }
}

/// A periodic tiling: one assembled patch plus its grid replication.
#[derive(Clone, Debug)]
pub struct Tiling {
    patch: &'static LatticePatch,
    cfg: TilingCfg,
    ring: Vec<Polygon>,
    lattice_vector_1: Vector3<f64>,
    lattice_vector_2: Vector3<f64>,
    patch_polygons: Vec<Polygon>,
    polygons: Vec<Polygon>,
}

impl Tiling {
    /// Assemble the named patch with the default grid and scale.
    pub fn assemble(name: &str) -> Result<Self, GeomError> {
        Self::assemble_with(name, TilingCfg::default())
    }

    /// Assemble the named patch, replicated over `cfg.rows × cfg.cols`.
    ///
    /// An unknown name fails with [`GeomError::UnknownPatch`]; a vertex
    /// figure containing an arity below 3 fails with
    /// [`GeomError::InvalidGeometry`].
    pub fn assemble_with(name: &str, cfg: TilingCfg) -> Result<Self, GeomError> {
        Self::assemble_patch(find_patch(name)?, cfg)
    }

    /// Assemble directly from a descriptor.
    pub fn assemble_patch(patch: &'static LatticePatch, cfg: TilingCfg) -> Result<Self, GeomError> {
        if patch.vertex_figure.iter().any(|&sides| sides < 3) {
            return Err(GeomError::InvalidGeometry(
                "vertex figure entry below 3 sides",
            ));
        }
        let ring = vertex_figure_ring(patch, cfg.scale)?;
        let lattice_vector_1 = lattice_vector(patch.i1);
        let lattice_vector_2 = lattice_vector(patch.i2);
        let patch_polygons = place_patch_polygons(patch, cfg.scale)?;
        let polygons = replicate(&patch_polygons, lattice_vector_1, lattice_vector_2, cfg);
        Ok(Self {
            patch,
            cfg,
            ring,
            lattice_vector_1,
            lattice_vector_2,
            patch_polygons,
            polygons,
        })
    }

    /// One twist tile per replicated polygon.
    pub fn twist_tiles(&self, params: TwistParams) -> Result<Vec<TwistTile>, GeomError> {
        self.polygons
            .iter()
            .map(|polygon| TwistTile::new(polygon, params))
            .collect()
    }

    #[inline]
    pub fn patch(&self) -> &'static LatticePatch {
        self.patch
    }

    #[inline]
    pub fn cfg(&self) -> TilingCfg {
        self.cfg
    }

    /// The vertex-figure ring around the shared origin vertex.
    #[inline]
    pub fn ring(&self) -> &[Polygon] {
        &self.ring
    }

    /// The two translation symmetries of the tiling (unscaled).
    #[inline]
    pub fn lattice_vectors(&self) -> (Vector3<f64>, Vector3<f64>) {
        (self.lattice_vector_1, self.lattice_vector_2)
    }

    /// The translatable unit before replication.
    #[inline]
    pub fn patch_polygons(&self) -> &[Polygon] {
        &self.patch_polygons
    }

    /// Every polygon of the replicated tiling.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// Ring of side-length-1 polygons fanning around a shared vertex at the
/// origin, one per vertex-figure entry: each is pinned to the origin by a
/// vertex and rotated past the interior angles already swept.
fn vertex_figure_ring(patch: &LatticePatch, scale: f64) -> Result<Vec<Polygon>, GeomError> {
    let mut ring = Vec::with_capacity(patch.vertex_figure.len());
    let mut swept = 0.0;
    for &sides in patch.vertex_figure {
        let mut polygon = Polygon::with_side_length(1.0, sides)?;
        let first = polygon.points()[0];
        polygon.translate(Point3::origin() - first);
        polygon.rotate_about(Point3::origin(), swept + 0.5 * polygon.interior_angle());
        swept += polygon.interior_angle();
        polygon.scale(scale);
        ring.push(polygon);
    }
    Ok(ring)
}

/// Sum of unit steps `(cos kπ, sin kπ)` over a generator's offset list.
fn lattice_vector(offsets: &[f64]) -> Vector3<f64> {
    offsets.iter().fold(Vector3::zeros(), |acc, &k| {
        acc + Vector3::new((k * PI).cos(), (k * PI).sin(), 0.0)
    })
}

/// Place each patch polygon: pin a vertex to the origin, align by half the
/// interior angle plus the rule's own rotation, then chain the unit
/// translations that walk it into position next to its neighbours.
fn place_patch_polygons(patch: &LatticePatch, scale: f64) -> Result<Vec<Polygon>, GeomError> {
    let mut placed = Vec::with_capacity(patch.polygons.len());
    for rule in patch.polygons {
        let mut polygon = Polygon::with_side_length(1.0, rule.sides)?;
        let first = polygon.points()[0];
        polygon.translate(Point3::origin() - first);
        polygon.rotate_about(
            Point3::origin(),
            0.5 * polygon.interior_angle() + rule.rotation * PI,
        );
        for &offset in rule.offsets {
            polygon.translate(Vector3::new((offset * PI).cos(), (offset * PI).sin(), 0.0));
        }
        polygon.scale(scale);
        placed.push(polygon);
    }
    Ok(placed)
}

/// Copy every patch polygon into each cell of the centered grid.
fn replicate(
    patch_polygons: &[Polygon],
    lv1: Vector3<f64>,
    lv2: Vector3<f64>,
    cfg: TilingCfg,
) -> Vec<Polygon> {
    let mut out = Vec::with_capacity(cfg.rows * cfg.cols * patch_polygons.len());
    for i in 0..cfg.rows {
        for j in 0..cfg.cols {
            let i_centered = i as f64 - cfg.rows as f64 / 2.0;
            let j_centered = j as f64 - cfg.cols as f64 / 2.0;
            let translation = -(lv1 * i_centered + lv2 * j_centered) * cfg.scale;
            for prototype in patch_polygons {
                let mut polygon = prototype.clone();
                polygon.translate(translation);
                out.push(polygon);
            }
        }
    }
    out
}
