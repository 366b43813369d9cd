//! Crease-pattern construction.
//!
//! The pattern repeats one pleat per tile edge: two parallel infinite lines
//! emanate from division points on the edge, adjacent pleats intersect to
//! pin down the central polygon, and the final vertex list interleaves both
//! so neighbouring pleats share vertices.

use nalgebra::{Point3, Rotation3, Vector3};

use super::types::{Assignment, Crease, TwistParams};
use crate::error::GeomError;
use crate::geom::{Line, Polygon};

/// One infinite line per pleat crease: two per tile edge, through the
/// division points at fractional distances `(1 ± w)/2` from the edge start,
/// both carrying the edge direction rotated by `tau`.
pub(super) fn build_pleat_lines(
    tile: &Polygon,
    params: &TwistParams,
) -> Result<Vec<Line>, GeomError> {
    let transform = Rotation3::from_axis_angle(&Vector3::z_axis(), params.tau);
    let n = tile.sides();
    let mut lines = Vec::with_capacity(2 * n);
    for i in 0..n {
        let edge = tile.edge(i)?;
        let length = edge.length();
        let direction = edge.direction()?;

        let distance_c = (1.0 - params.w) / 2.0 * length;
        let distance_d = (1.0 + params.w) / 2.0 * length;
        let point_c = edge.a + direction * distance_c;
        let point_d = edge.a + direction * distance_d;

        let pleat_direction = transform * direction;
        lines.push(Line::new(point_c, pleat_direction)?);
        lines.push(Line::new(point_d, pleat_direction)?);
    }
    Ok(lines)
}

/// The inner polygon pinned down by adjacent pleats.
///
/// For every even line index `i`, intersect lines `i + 1` and `i + 2`
/// (wrapping modulo the count, which closes the loop between the last edge
/// and the first): one central vertex per tile edge.
pub(super) fn build_central_polygon(pleat_lines: &[Line]) -> Result<Polygon, GeomError> {
    let count = pleat_lines.len();
    let mut points = Vec::with_capacity(count / 2);
    for i in (0..count).step_by(2) {
        let b = &pleat_lines[(i + 1) % count];
        let c = &pleat_lines[(i + 2) % count];
        points.push(b.intersect(c)?);
    }
    Ok(Polygon::from_points(points))
}

/// Interleave pleat-line anchors with central-polygon vertices.
///
/// Every even line contributes the central vertex of the *previous* edge
/// first, wrapping to the last central vertex for edge 0, so adjacent pleats
/// connect without duplicating vertices. The layout per tile edge `i` is
/// `[central[i − 1], C_i, D_i]`.
pub(super) fn build_vertices(pleat_lines: &[Line], central: &Polygon) -> Vec<Point3<f64>> {
    let mut vertices = Vec::with_capacity(pleat_lines.len() / 2 * 3);
    for (index, line) in pleat_lines.iter().enumerate() {
        if index % 2 == 0 {
            let edge_index = index / 2;
            let previous = if edge_index == 0 {
                central.sides() - 1
            } else {
                edge_index - 1
            };
            vertices.push(central.points()[previous]);
        }
        vertices.push(line.point());
    }
    vertices
}

/// Emit the 3 creases of every pleat with their mountain/valley parity.
///
/// Vertices are numbered around each pleat as follows, with 0 and 3 on the
/// central polygon and 1 and 2 on the tile edge:
///
/// ```text
///     3---------0
///    /         /
///   2         1
/// ```
pub(super) fn build_creases(
    sides: usize,
    vertex_count: usize,
    reversed: bool,
) -> (Vec<Crease>, Vec<Assignment>) {
    let (lead, trail) = if reversed {
        (Assignment::Valley, Assignment::Mountain)
    } else {
        (Assignment::Mountain, Assignment::Valley)
    };
    let mut creases = Vec::with_capacity(3 * sides);
    let mut assignments = Vec::with_capacity(3 * sides);
    for i in 0..sides {
        let base = i * 3;
        // First pleat crease.
        creases.push(Crease::new(base, base + 1));
        assignments.push(lead);
        // Second pleat crease.
        creases.push(Crease::new(base + 2, (base + 3) % vertex_count));
        assignments.push(trail);
        // Chord along the central polygon.
        creases.push(Crease::new(base, (base + 3) % vertex_count));
        assignments.push(trail);
    }
    (creases, assignments)
}

/// Build the whole derived bundle for one tile polygon.
pub(super) fn build_pattern(
    tile: &Polygon,
    params: &TwistParams,
) -> Result<(Polygon, Vec<Point3<f64>>), GeomError> {
    let pleat_lines = build_pleat_lines(tile, params)?;
    let central = build_central_polygon(&pleat_lines)?;
    let vertices = build_vertices(&pleat_lines, &central);
    Ok((central, vertices))
}
