//! Ordered polygons with affine placement operations.

use std::f64::consts::PI;

use nalgebra::{Point3, Rotation3, Vector3};

use super::Segment;
use crate::error::GeomError;

/// An ordered, closed loop of points with a tracked center.
///
/// Invariants:
/// - CCW winding; downstream pleat handedness relies on it.
/// - Edge `i` connects `points[i]` to `points[(i + 1) % n]`.
/// - `points.len() >= 3` for non-degenerate use. The regular constructors
///   enforce it; [`Polygon::from_points`] does not (see
///   [`Polygon::is_degenerate`]).
#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Point3<f64>>,
    center: Point3<f64>,
}

impl Polygon {
    /// Wrap an existing CCW point loop; the center is the vertex centroid.
    pub fn from_points(points: Vec<Point3<f64>>) -> Self {
        let center = if points.is_empty() {
            Point3::origin()
        } else {
            let sum = points
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords);
            Point3::from(sum / points.len() as f64)
        };
        Self { points, center }
    }

    /// Regular polygon with the given circumradius, centered on the origin.
    ///
    /// Vertices are laid out CCW at angular steps of `2π/sides` starting at
    /// angle 0. `sides < 3` or a non-positive radius fail with
    /// [`GeomError::InvalidParameter`].
    pub fn regular(circumradius: f64, sides: usize) -> Result<Self, GeomError> {
        if sides < 3 {
            return Err(GeomError::InvalidParameter {
                name: "sides",
                reason: format!("{sides} is below the minimum of 3"),
            });
        }
        if !circumradius.is_finite() || circumradius <= 0.0 {
            return Err(GeomError::InvalidParameter {
                name: "circumradius",
                reason: format!("{circumradius} is not positive"),
            });
        }
        let sector = 2.0 * PI / sides as f64;
        let points = (0..sides)
            .map(|i| {
                let theta = sector * i as f64;
                Point3::new(circumradius * theta.cos(), circumradius * theta.sin(), 0.0)
            })
            .collect();
        Ok(Self {
            points,
            center: Point3::origin(),
        })
    }

    /// Regular polygon with the given side length, centered on the origin.
    ///
    /// The circumradius follows as `side / (2·sin(π/sides))`.
    pub fn with_side_length(side: f64, sides: usize) -> Result<Self, GeomError> {
        if sides < 3 {
            return Err(GeomError::InvalidParameter {
                name: "sides",
                reason: format!("{sides} is below the minimum of 3"),
            });
        }
        if !side.is_finite() || side <= 0.0 {
            return Err(GeomError::InvalidParameter {
                name: "side",
                reason: format!("{side} is not positive"),
            });
        }
        let circumradius = side / (2.0 * (PI / sides as f64).sin());
        Self::regular(circumradius, sides)
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    #[inline]
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Length of the first edge; zero for degenerate polygons.
    pub fn side_length(&self) -> f64 {
        if self.points.len() < 2 {
            0.0
        } else {
            (self.points[1] - self.points[0]).norm()
        }
    }

    /// Rotate every point about the polygon's own center; the center stays.
    pub fn rotate(&mut self, theta: f64) {
        let center = self.center;
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), theta);
        for p in &mut self.points {
            *p = center + rotation * (*p - center);
        }
    }

    /// Rotate every point (and the center) about an arbitrary pivot.
    pub fn rotate_about(&mut self, pivot: Point3<f64>, theta: f64) {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), theta);
        for p in &mut self.points {
            *p = pivot + rotation * (*p - pivot);
        }
        self.center = pivot + rotation * (self.center - pivot);
    }

    /// Translate every point and the center by the same displacement.
    pub fn translate(&mut self, displacement: Vector3<f64>) {
        for p in &mut self.points {
            *p += displacement;
        }
        self.center += displacement;
    }

    /// Uniformly scale all positions relative to the origin (not the
    /// center), the center included.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.points {
            *p = Point3::from(p.coords * factor);
        }
        self.center = Point3::from(self.center.coords * factor);
    }

    /// Edge `i`, from `points[i]` to `points[(i + 1) % n]`.
    pub fn edge(&self, i: usize) -> Result<Segment, GeomError> {
        let n = self.points.len();
        if i >= n {
            return Err(GeomError::IndexOutOfRange { index: i, len: n });
        }
        Ok(Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    pub fn edge_midpoint(&self, i: usize) -> Result<Point3<f64>, GeomError> {
        Ok(self.edge(i)?.midpoint())
    }

    /// Vector from the center to the midpoint of edge `i`.
    ///
    /// The tiling assembler reads these as adjacency directions.
    pub fn perpendicular_bisector(&self, i: usize) -> Result<Vector3<f64>, GeomError> {
        Ok(self.edge_midpoint(i)? - self.center)
    }

    /// Closed-form `(90 − 180/n)` degrees, in radians.
    ///
    /// Half the true interior angle; the lattice-patch tables are authored
    /// against this convention.
    pub fn interior_angle(&self) -> f64 {
        (90.0 - 180.0 / self.points.len() as f64).to_radians()
    }

    /// Closed-form `360/n` degrees, in radians.
    pub fn exterior_angle(&self) -> f64 {
        (360.0 / self.points.len() as f64).to_radians()
    }
}
