use super::*;
use crate::error::GeomError;
use nalgebra::{Point3, Vector3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

#[test]
fn unit_rejects_zero_vector() {
    assert_eq!(
        unit(Vector3::zeros()).unwrap_err(),
        GeomError::DegenerateVector
    );
    let u = unit(Vector3::new(3.0, 4.0, 0.0)).unwrap();
    assert!((u.norm() - 1.0).abs() < 1e-12);
    assert!((u.x - 0.6).abs() < 1e-12 && (u.y - 0.8).abs() < 1e-12);
}

#[test]
fn segment_midpoint_and_clamped_point_at() {
    let s = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 0.0));
    let m = s.midpoint();
    assert!((m.x - 1.0).abs() < 1e-12 && (m.y - 2.0).abs() < 1e-12);
    assert!((s.length() - 20.0_f64.sqrt()).abs() < 1e-12);
    // t outside [0, 1] clamps to the endpoints
    assert!((s.point_at(-0.5) - s.a).norm() < 1e-12);
    assert!((s.point_at(1.5) - s.b).norm() < 1e-12);
    assert!((s.point_at(0.25) - Point3::new(0.5, 1.0, 0.0)).norm() < 1e-12);
}

#[test]
fn segment_perpendicular_points_left() {
    let s = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let p = s.perpendicular().unwrap();
    // Left of +x is +y, and the handedness check must hold by construction.
    assert!((p - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    let d = s.direction().unwrap();
    assert!(d.cross(&p).z > 0.0);
}

#[test]
fn line_construction_rejects_zero_direction() {
    assert_eq!(
        Line::new(Point3::origin(), Vector3::zeros()).unwrap_err(),
        GeomError::DegenerateVector
    );
}

#[test]
fn parallel_lines_report_no_intersection() {
    let d = Vector3::new(1.0, 2.0, 0.0);
    let a = Line::new(Point3::new(0.0, 0.0, 0.0), d).unwrap();
    let b = Line::new(Point3::new(5.0, -1.0, 0.0), d).unwrap();
    assert_eq!(a.intersect(&b).unwrap_err(), GeomError::NoIntersection);
    // Coincident lines are parallel too.
    let c = Line::new(Point3::new(2.0, 4.0, 0.0), d * -3.0).unwrap();
    assert_eq!(a.intersect(&c).unwrap_err(), GeomError::NoIntersection);
}

#[test]
fn intersection_lies_on_both_lines() {
    let a = Line::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0)).unwrap();
    let b = Line::new(Point3::new(2.0, -3.0, 0.0), Vector3::new(0.0, 1.0, 0.0)).unwrap();
    let p = a.intersect(&b).unwrap();
    assert!((p - Point3::new(2.0, 1.0, 0.0)).norm() < 1e-9);
    assert!(a.distance_squared(p) < 1e-18);
    assert!(b.distance_squared(p) < 1e-18);

    // A skewed planar pair, checked parametrically rather than by hand.
    let c = Line::new(Point3::new(-1.0, -1.0, 0.0), Vector3::new(2.0, 1.0, 0.0)).unwrap();
    let d = Line::new(Point3::new(3.0, 0.0, 0.0), Vector3::new(-1.0, 4.0, 0.0)).unwrap();
    let q = c.intersect(&d).unwrap();
    assert!(c.distance_squared(q) < 1e-18);
    assert!(d.distance_squared(q) < 1e-18);
}

#[test]
fn regular_polygon_rejects_bad_parameters() {
    assert!(matches!(
        Polygon::regular(1.0, 2),
        Err(GeomError::InvalidParameter { name: "sides", .. })
    ));
    assert!(matches!(
        Polygon::regular(0.0, 5),
        Err(GeomError::InvalidParameter {
            name: "circumradius",
            ..
        })
    ));
    assert!(matches!(
        Polygon::with_side_length(-1.0, 5),
        Err(GeomError::InvalidParameter { name: "side", .. })
    ));
}

#[test]
fn unit_hexagon_has_unit_circumradius() {
    // side 1, n = 6: circumradius = 0.5 / sin(π/6) = 1.
    let hex = Polygon::with_side_length(1.0, 6).unwrap();
    assert_eq!(hex.sides(), 6);
    for p in hex.points() {
        assert!(((p - Point3::origin()).norm() - 1.0).abs() < 1e-12);
    }
    // Consecutive vertices 60° apart, CCW.
    for i in 0..6 {
        let a = hex.points()[i];
        let b = hex.points()[(i + 1) % 6];
        let angle = b.y.atan2(b.x) - a.y.atan2(a.x);
        let wrapped = (angle + 2.0 * PI) % (2.0 * PI);
        assert!((wrapped - FRAC_PI_3).abs() < 1e-9);
    }
    assert!((hex.side_length() - 1.0).abs() < 1e-12);
}

#[test]
fn rotate_is_center_pivoted() {
    let mut square = Polygon::regular(2.0, 4).unwrap();
    square.translate(Vector3::new(10.0, 0.0, 0.0));
    let center = square.center();
    let before = square.points().to_vec();
    square.rotate(FRAC_PI_2);
    assert!((square.center() - center).norm() < 1e-12);
    // Distances to the center are preserved and points actually moved.
    for (p, q) in before.iter().zip(square.points()) {
        assert!(((p - center).norm() - (q - center).norm()).abs() < 1e-9);
    }
    assert!((before[0] - square.points()[0]).norm() > 1.0);
}

#[test]
fn rotate_about_keeps_the_pivot_fixed() {
    let mut tri = Polygon::with_side_length(1.0, 3).unwrap();
    let v0 = tri.points()[0];
    tri.translate(Point3::origin() - v0);
    assert!((tri.points()[0] - Point3::origin()).norm() < 1e-12);
    tri.rotate_about(Point3::origin(), 1.2345);
    // The vertex pinned at the pivot does not move; the center sweeps.
    assert!((tri.points()[0] - Point3::origin()).norm() < 1e-12);
}

#[test]
fn scale_is_origin_relative() {
    let mut square = Polygon::regular(1.0, 4).unwrap();
    square.translate(Vector3::new(3.0, 0.0, 0.0));
    square.scale(2.0);
    assert!((square.center() - Point3::new(6.0, 0.0, 0.0)).norm() < 1e-12);
    assert!((square.points()[0] - Point3::new(8.0, 0.0, 0.0)).norm() < 1e-12);
}

#[test]
fn edge_queries_wrap_and_bounds_check() {
    let square = Polygon::regular(1.0, 4).unwrap();
    // Last edge wraps to the first point.
    let e = square.edge(3).unwrap();
    assert!((e.b - square.points()[0]).norm() < 1e-12);
    assert!(matches!(
        square.perpendicular_bisector(4),
        Err(GeomError::IndexOutOfRange { index: 4, len: 4 })
    ));
    // Bisector of a centered square's edge points at the edge midpoint.
    let bis = square.perpendicular_bisector(0).unwrap();
    let mid = square.edge_midpoint(0).unwrap();
    assert!((bis - (mid - Point3::origin())).norm() < 1e-12);
}

#[test]
fn closed_form_angles() {
    let square = Polygon::regular(1.0, 4).unwrap();
    assert!((square.interior_angle() - 45.0_f64.to_radians()).abs() < 1e-12);
    assert!((square.exterior_angle() - FRAC_PI_2).abs() < 1e-12);
    let hex = Polygon::regular(1.0, 6).unwrap();
    assert!((hex.interior_angle() - 60.0_f64.to_radians()).abs() < 1e-12);
    assert!((hex.exterior_angle() - 60.0_f64.to_radians()).abs() < 1e-12);
}
