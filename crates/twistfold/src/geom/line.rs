//! Finite segments and infinite parametric lines.

use nalgebra::{Point3, Vector3};

use super::{unit, EPS};
use crate::error::GeomError;

/// A finite segment between two points.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.a, &self.b)
    }

    /// Point at fractional distance `t` from `a`; `t` is clamped to [0, 1].
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        let t = t.clamp(0.0, 1.0);
        self.a + (self.b - self.a) * t
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Unit direction from `a` to `b`.
    pub fn direction(&self) -> Result<Vector3<f64>, GeomError> {
        unit(self.b - self.a)
    }

    /// Unit vector orthogonal to the segment, always pointing "left" of the
    /// direction `a → b` (positive z cross sign). Planar segments only.
    pub fn perpendicular(&self) -> Result<Vector3<f64>, GeomError> {
        let direction = self.direction()?;
        let mut orthogonal = Vector3::new(direction.y, -direction.x, 0.0);
        if direction.cross(&orthogonal).z < 0.0 {
            orthogonal = -orthogonal;
        }
        Ok(orthogonal)
    }
}

/// An infinite line in parametric form: `point + direction · t`.
///
/// Invariant: `direction` is unit length, enforced at construction.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    point: Point3<f64>,
    direction: Vector3<f64>,
}

impl Line {
    /// Construct from an anchor point and a direction.
    ///
    /// The direction is normalized here; a zero direction fails with
    /// [`GeomError::DegenerateVector`].
    pub fn new(point: Point3<f64>, direction: Vector3<f64>) -> Result<Self, GeomError> {
        Ok(Self {
            point,
            direction: unit(direction)?,
        })
    }

    #[inline]
    pub fn point(&self) -> Point3<f64> {
        self.point
    }

    #[inline]
    pub fn direction(&self) -> Vector3<f64> {
        self.direction
    }

    /// Intersection point with `other`.
    ///
    /// Solves `p + v·t = q + u·s` via `a = v × u` and `b = (q − p) × u`,
    /// taking `t = b_k / a_k` for the first component `k` of `a` with
    /// magnitude above [`EPS`] (x, then y, then z — for planar lines only
    /// the z component is non-zero). Parallel or coincident lines fail with
    /// [`GeomError::NoIntersection`].
    pub fn intersect(&self, other: &Line) -> Result<Point3<f64>, GeomError> {
        let p = self.point;
        let v = self.direction;
        let q = other.point;
        let u = other.direction;

        let a = v.cross(&u);
        let b = (q - p).cross(&u);

        let t = if a.x.abs() > EPS {
            b.x / a.x
        } else if a.y.abs() > EPS {
            b.y / a.y
        } else if a.z.abs() > EPS {
            b.z / a.z
        } else {
            return Err(GeomError::NoIntersection);
        };
        Ok(p + v * t)
    }

    /// Squared distance from `p` to the closest point on the line; zero
    /// exactly when `p` satisfies the parametric form.
    pub fn distance_squared(&self, p: Point3<f64>) -> f64 {
        let to_p = p - self.point;
        let along = to_p.dot(&self.direction);
        (to_p - self.direction * along).norm_squared()
    }
}
