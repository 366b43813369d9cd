//! The lattice-patch catalog.
//!
//! One entry per supported Archimedean vertex figure (`3.3.3.3.6` ships in
//! two placement variants). Angles are stored as fractions of π; `i1`/`i2`
//! are the angular-offset lists summed into the two translation generators,
//! and each polygon rule chains unit translations along its `offsets` before
//! the final display scale is applied.

use serde::Serialize;

use crate::error::GeomError;

/// Placement rule for one polygon of a lattice patch.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PatchPolygon {
    /// Arity of the polygon.
    pub sides: usize,
    /// Chained unit-translation directions, as fractions of π.
    pub offsets: &'static [f64],
    /// Extra rotation applied after the half-interior alignment, as a
    /// fraction of π.
    pub rotation: f64,
}

/// A named lattice patch: one translatable unit of a periodic tiling.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LatticePatch {
    pub name: &'static str,
    /// Polygon arities meeting at one vertex of the tiling.
    pub vertex_figure: &'static [usize],
    /// Angular offsets of the first translation generator.
    pub i1: &'static [f64],
    /// Angular offsets of the second translation generator.
    pub i2: &'static [f64],
    pub polygons: &'static [PatchPolygon],
}

const THIRD: f64 = 1.0 / 3.0;
const SIXTH: f64 = 1.0 / 6.0;

static PATCHES: &[LatticePatch] = &[
    LatticePatch {
        name: "3.3.3.3.3.3",
        vertex_figure: &[3, 3, 3, 3, 3, 3],
        i1: &[0.0],
        i2: &[THIRD],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0],
                rotation: THIRD,
            },
        ],
    },
    LatticePatch {
        name: "4.4.4.4",
        vertex_figure: &[4, 4, 4, 4],
        i1: &[0.0],
        i2: &[0.5],
        polygons: &[PatchPolygon {
            sides: 4,
            offsets: &[],
            rotation: 0.0,
        }],
    },
    LatticePatch {
        name: "6.6.6",
        vertex_figure: &[6, 6, 6],
        i1: &[0.0, THIRD],
        i2: &[2.0 * THIRD, THIRD],
        polygons: &[PatchPolygon {
            sides: 6,
            offsets: &[],
            rotation: 0.0,
        }],
    },
    LatticePatch {
        name: "3.3.3.3.6",
        vertex_figure: &[3, 3, 3, 3, 6],
        i1: &[0.0, 0.0, THIRD],
        i2: &[THIRD, 2.0 * THIRD, THIRD],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, 0.0],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, THIRD],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, THIRD, 0.0],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, THIRD, THIRD],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, THIRD, THIRD],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[THIRD],
                rotation: 0.0,
            },
        ],
    },
    LatticePatch {
        name: "3.3.3.3.6b",
        vertex_figure: &[3, 3, 3, 3, 6],
        i1: &[0.0, -THIRD, 0.0],
        i2: &[2.0 * THIRD, 2.0 * THIRD, THIRD],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 2.0 * THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[THIRD],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, THIRD],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[THIRD, THIRD],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[THIRD, THIRD],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[2.0 * THIRD],
                rotation: 0.0,
            },
        ],
    },
    LatticePatch {
        name: "3.3.3.4.4",
        vertex_figure: &[3, 3, 3, 4, 4],
        i1: &[0.0],
        i2: &[THIRD, 0.5],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[THIRD],
                rotation: 0.0,
            },
        ],
    },
    LatticePatch {
        name: "3.3.4.3.4",
        vertex_figure: &[3, 3, 4, 3, 4],
        i1: &[0.0, SIXTH],
        i2: &[2.0 * THIRD, 0.5],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[0.0],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[THIRD],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[THIRD, SIXTH],
                rotation: 0.5,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[2.0 * THIRD],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: THIRD,
            },
        ],
    },
    LatticePatch {
        name: "3.4.6.4",
        vertex_figure: &[3, 4, 6, 4],
        i1: &[0.0, SIXTH, -SIXTH],
        i2: &[THIRD, SIXTH, 0.5],
        polygons: &[
            PatchPolygon {
                sides: 4,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[-THIRD],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[-THIRD],
                rotation: -SIXTH,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[-THIRD, -SIXTH],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[-THIRD, -SIXTH, 0.0],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[0.0],
                rotation: -SIXTH,
            },
        ],
    },
    LatticePatch {
        name: "3.6.3.6",
        vertex_figure: &[3, 6, 3, 6],
        i1: &[0.0, 0.0],
        i2: &[THIRD, THIRD],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[0.0],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, 0.0, THIRD],
                rotation: THIRD,
            },
        ],
    },
    LatticePatch {
        name: "3.12.12",
        vertex_figure: &[3, 12, 12],
        i1: &[0.0, -SIXTH, 0.0, SIXTH],
        i2: &[THIRD, 0.5, THIRD, SIXTH],
        polygons: &[
            PatchPolygon {
                sides: 3,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 12,
                offsets: &[0.0, -SIXTH],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 3,
                offsets: &[0.0, -SIXTH, 0.0, SIXTH, THIRD, 0.5],
                rotation: THIRD,
            },
        ],
    },
    LatticePatch {
        name: "4.6.12",
        vertex_figure: &[4, 6, 12],
        i1: &[0.0, -SIXTH, SIXTH, 0.5, THIRD, SIXTH],
        i2: &[SIXTH, THIRD, 0.5, 2.0 * THIRD, 5.0 * SIXTH, 0.5],
        polygons: &[
            PatchPolygon {
                sides: 4,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[0.0, -SIXTH],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[0.0, -SIXTH, SIXTH, 0.5],
                rotation: THIRD,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[0.0, -SIXTH, SIXTH, 0.5, THIRD],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 4,
                offsets: &[0.5, 0.0, SIXTH, THIRD, 0.5],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 6,
                offsets: &[0.5, 0.0, SIXTH, THIRD, 0.5, 2.0 * THIRD],
                rotation: SIXTH,
            },
            PatchPolygon {
                sides: 12,
                offsets: &[0.5],
                rotation: 0.0,
            },
        ],
    },
    LatticePatch {
        name: "4.8.8",
        vertex_figure: &[4, 8, 8],
        i1: &[0.0, -0.25, 0.0, 0.25],
        i2: &[0.0, 0.5, 0.25],
        polygons: &[
            PatchPolygon {
                sides: 4,
                offsets: &[],
                rotation: 0.0,
            },
            PatchPolygon {
                sides: 8,
                offsets: &[0.0, -0.25],
                rotation: 0.0,
            },
        ],
    },
];

/// The whole catalog.
pub fn patches() -> &'static [LatticePatch] {
    PATCHES
}

/// Names of every patch in the catalog.
pub fn patch_names() -> Vec<&'static str> {
    PATCHES.iter().map(|p| p.name).collect()
}

/// Look up a patch by its vertex-figure name.
pub fn find_patch(name: &str) -> Result<&'static LatticePatch, GeomError> {
    PATCHES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| GeomError::UnknownPatch(name.to_string()))
}
