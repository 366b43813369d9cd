use proptest::prelude::*;

use super::sample::{self, ReplayToken, SampleCfg};
use super::*;
use crate::error::GeomError;
use crate::geom::Polygon;

fn square_tile(reversed: bool) -> TwistTile {
    let base = Polygon::regular(5.0, 4).unwrap();
    let params = TwistParams {
        w: 0.25,
        tau: 120.0_f64.to_radians(),
        reversed,
    };
    TwistTile::new(&base, params).unwrap()
}

#[test]
fn pattern_counts_match_arity() {
    for sides in 3..=12 {
        let base = Polygon::regular(5.0, sides).unwrap();
        let tile = TwistTile::new(&base, TwistParams::default()).unwrap();
        assert_eq!(tile.creases().len(), 3 * sides);
        assert_eq!(tile.assignments().len(), 3 * sides);
        assert_eq!(tile.vertices().len(), 3 * sides);
        assert_eq!(tile.central_polygon().sides(), sides);
        assert_eq!(tile.sides(), sides);
    }
}

#[test]
fn tile_polygon_is_scaled_base() {
    let base = Polygon::regular(5.0, 4).unwrap();
    let tile = TwistTile::new(&base, TwistParams::default()).unwrap();
    assert!((tile.tile_polygon().side_length() - TILE_SCALE * base.side_length()).abs() < 1e-9);
}

#[test]
fn division_points_sit_on_the_first_edge() {
    let tile = square_tile(false);
    let edge = tile.tile_polygon().edge(0).unwrap();
    let direction = edge.direction().unwrap();
    let w = tile.params().w;
    let c = edge.a + direction * ((1.0 - w) / 2.0 * edge.length());
    let d = edge.a + direction * ((1.0 + w) / 2.0 * edge.length());
    // Per tile edge the vertex layout is [central[prev], C, D].
    assert!((tile.vertices()[1] - c).norm() < 1e-9);
    assert!((tile.vertices()[2] - d).norm() < 1e-9);
}

#[test]
fn even_vertices_are_previous_central_vertices() {
    let tile = square_tile(false);
    let n = tile.sides();
    let central = tile.central_polygon().points();
    for i in 0..n {
        let previous = (i + n - 1) % n;
        assert!((tile.vertices()[3 * i] - central[previous]).norm() < 1e-9);
    }
}

#[test]
fn chords_trace_the_central_polygon() {
    let tile = square_tile(false);
    let n = tile.sides();
    let total = tile.vertices().len();
    for i in 0..n {
        let chord = tile.creases()[3 * i + 2];
        assert_eq!(chord.a.0, 3 * i);
        assert_eq!(chord.b.0, (3 * i + 3) % total);
    }
}

#[test]
fn square_assignments_follow_pleat_parity() {
    let tile = square_tile(false);
    assert_eq!(tile.creases().len(), 12);
    for pleat in tile.assignments().chunks(3) {
        assert_eq!(
            pleat,
            [Assignment::Mountain, Assignment::Valley, Assignment::Valley]
        );
    }
    let reversed = square_tile(true);
    for pleat in reversed.assignments().chunks(3) {
        assert_eq!(
            pleat,
            [Assignment::Valley, Assignment::Mountain, Assignment::Mountain]
        );
    }
}

#[test]
fn alpha_square_example() {
    // w = 0.25, τ = 120°: atan(0.25 · tan 120°) = −23.41°, reported absolute.
    let tile = square_tile(false);
    assert!((tile.alpha() - (0.25 * 120.0_f64.to_radians().tan()).atan().abs()).abs() < 1e-15);
    assert!((tile.alpha().to_degrees() - 23.4135).abs() < 1e-3);
}

#[test]
fn alpha_safe_switches_at_hexagons() {
    let hexagon = Polygon::regular(5.0, 6).unwrap();
    let tile = TwistTile::new(&hexagon, TwistParams::default()).unwrap();
    assert!((tile.alpha_safe() - tile.tile_polygon().interior_angle()).abs() < 1e-12);

    let octagon = Polygon::regular(5.0, 8).unwrap();
    let tile = TwistTile::new(&octagon, TwistParams::default()).unwrap();
    assert!((tile.alpha_safe() - tile.tile_polygon().exterior_angle()).abs() < 1e-12);
}

#[test]
fn invalid_w_is_rejected_before_building() {
    let base = Polygon::regular(5.0, 4).unwrap();
    for w in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
        let params = TwistParams {
            w,
            ..TwistParams::default()
        };
        assert!(matches!(
            TwistTile::new(&base, params),
            Err(GeomError::InvalidParameter { name: "w", .. })
        ));
    }
}

#[test]
fn failed_rebuild_keeps_previous_state() {
    let mut tile = square_tile(false);
    let before_params = tile.params();
    let before = tile.assignments().to_vec();
    let bad = TwistParams {
        w: 1.5,
        ..before_params
    };
    assert!(tile.rebuild(bad).is_err());
    assert_eq!(tile.assignments(), before.as_slice());
    assert!((tile.params().w - before_params.w).abs() < 1e-15);
}

#[test]
fn rebuild_replaces_the_whole_bundle() {
    let mut tile = square_tile(false);
    tile.invert_pleat(0).unwrap();
    let old_central = tile.central_polygon().points().to_vec();
    let params = TwistParams {
        w: 0.5,
        tau: 0.4,
        reversed: false,
    };
    tile.rebuild(params).unwrap();
    // Geometry moved, counts held, and the flip parity was reset.
    assert!((tile.central_polygon().points()[0] - old_central[0]).norm() > 1e-6);
    assert_eq!(tile.creases().len(), 12);
    for pleat in tile.assignments().chunks(3) {
        assert_eq!(
            pleat,
            [Assignment::Mountain, Assignment::Valley, Assignment::Valley]
        );
    }
}

#[test]
fn invert_pleat_rejects_bad_index() {
    let mut tile = square_tile(false);
    assert!(matches!(
        tile.invert_pleat(12),
        Err(GeomError::IndexOutOfRange { index: 12, len: 12 })
    ));
}

#[test]
fn degenerate_base_polygon_is_rejected() {
    let degenerate = Polygon::from_points(vec![]);
    assert!(matches!(
        TwistTile::new(&degenerate, TwistParams::default()),
        Err(GeomError::InvalidGeometry(_))
    ));
}

proptest! {
    #[test]
    fn invert_pleat_is_self_inverse_and_local(
        seed in 0u64..256,
        index in 0u64..16,
        pick in 0usize..1024,
    ) {
        let mut tile =
            sample::draw_twist_tile(SampleCfg::default(), ReplayToken { seed, index }).unwrap();
        let k = pick % tile.creases().len();
        let before = tile.assignments().to_vec();

        tile.invert_pleat(k).unwrap();
        let group = Pleat::containing(k).crease_indices();
        for (i, (old, new)) in before.iter().zip(tile.assignments()).enumerate() {
            if group.contains(&i) {
                prop_assert_eq!(*new, old.flipped());
            } else {
                prop_assert_eq!(new, old);
            }
        }

        tile.invert_pleat(k).unwrap();
        prop_assert_eq!(tile.assignments(), before.as_slice());
    }

    #[test]
    fn sampled_tiles_keep_the_three_per_edge_invariant(
        seed in 0u64..512,
        index in 0u64..8,
    ) {
        let tile =
            sample::draw_twist_tile(SampleCfg::default(), ReplayToken { seed, index }).unwrap();
        let n = tile.sides();
        prop_assert_eq!(tile.creases().len(), 3 * n);
        prop_assert_eq!(tile.assignments().len(), 3 * n);
        prop_assert_eq!(tile.central_polygon().sides(), n);
        prop_assert_eq!(tile.vertices().len(), 3 * n);
    }
}
