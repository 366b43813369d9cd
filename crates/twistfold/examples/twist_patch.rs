//! Fit a twist tile to every polygon of an assembled lattice patch.
//!
//! Purpose
//! - Exercise the whole pipeline end to end the way an interactive caller
//!   would: assemble a tiling, build one crease pattern per polygon, and
//!   report sizes and timings.

use std::time::Instant;

use twistfold::tiling::{Tiling, TilingCfg, DISPLAY_SCALE};
use twistfold::twist::TwistParams;

fn main() {
    let cfg = TilingCfg {
        rows: 3,
        cols: 3,
        scale: DISPLAY_SCALE,
    };
    let start = Instant::now();
    let tiling = Tiling::assemble_with("3.4.6.4", cfg).expect("catalog patch");
    let assembled = start.elapsed();

    let start = Instant::now();
    let tiles = tiling
        .twist_tiles(TwistParams::default())
        .expect("valid twist parameters");
    let patterned = start.elapsed();

    let creases: usize = tiles.iter().map(|t| t.creases().len()).sum();
    println!(
        "patch {}: {} polygons assembled in {assembled:?}",
        tiling.patch().name,
        tiling.polygons().len()
    );
    println!(
        "{} twist tiles ({creases} creases) generated in {patterned:?}",
        tiles.len()
    );
    let (lv1, lv2) = tiling.lattice_vectors();
    println!("lattice vectors: ({:.3}, {:.3}) / ({:.3}, {:.3})", lv1.x, lv1.y, lv2.x, lv2.y);
}
