use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use twistfold::geom::Polygon;
use twistfold::tiling::{patches, Tiling, TilingCfg, DISPLAY_SCALE};
use twistfold::twist::{Assignment, TwistParams, TwistTile};
use twistfold::Vec3;

mod artifact;

#[derive(Parser)]
#[command(name = "twistfold")]
#[command(about = "Twist-fold crease patterns and Archimedean tilings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the crease pattern of a single twist tile
    Pattern {
        /// Arity of the base polygon
        #[arg(long, default_value_t = 4)]
        sides: usize,
        /// Segment ratio, strictly inside (0, 1)
        #[arg(long, default_value_t = 0.25)]
        w: f64,
        /// Tilt angle in degrees
        #[arg(long, default_value_t = 120.0)]
        tau: f64,
        /// Swap the mountain/valley parity of every pleat
        #[arg(long)]
        reversed: bool,
        /// Circumradius of the base polygon
        #[arg(long, default_value_t = 5.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Assemble a lattice patch and replicate it over a grid
    Tiling {
        /// Patch name from the catalog (see `patches`)
        #[arg(long)]
        patch: String,
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        #[arg(long, default_value_t = DISPLAY_SCALE)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// List the lattice-patch catalog
    Patches,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Pattern {
            sides,
            w,
            tau,
            reversed,
            radius,
            out,
        } => pattern(sides, w, tau, reversed, radius, out),
        Action::Tiling {
            patch,
            rows,
            cols,
            scale,
            out,
        } => tiling(patch, rows, cols, scale, out),
        Action::Patches => list_patches(),
    }
}

#[derive(Serialize)]
struct PatternDoc {
    sides: usize,
    w: f64,
    tau_degrees: f64,
    reversed: bool,
    alpha_degrees: f64,
    alpha_safe_degrees: f64,
    tile_polygon: Vec<[f64; 2]>,
    central_polygon: Vec<[f64; 2]>,
    vertices: Vec<[f64; 2]>,
    creases: Vec<[usize; 2]>,
    assignments: Vec<Assignment>,
}

fn pattern(
    sides: usize,
    w: f64,
    tau: f64,
    reversed: bool,
    radius: f64,
    out: PathBuf,
) -> Result<()> {
    tracing::info!(sides, w, tau, reversed, "pattern");
    let base = Polygon::regular(radius, sides)?;
    let params = TwistParams {
        w,
        tau: tau.to_radians(),
        reversed,
    };
    let tile = TwistTile::new(&base, params)?;

    let doc = PatternDoc {
        sides,
        w,
        tau_degrees: tau,
        reversed,
        alpha_degrees: tile.alpha().to_degrees(),
        alpha_safe_degrees: tile.alpha_safe().to_degrees(),
        tile_polygon: xy_loop(tile.tile_polygon()),
        central_polygon: xy_loop(tile.central_polygon()),
        vertices: tile.vertices().iter().map(|p| [p.x, p.y]).collect(),
        creases: tile
            .creases()
            .iter()
            .map(|c| [c.a.0, c.b.0])
            .collect(),
        assignments: tile.assignments().to_vec(),
    };
    let sidecar = artifact::write_with_provenance(
        &out,
        &doc,
        json!({ "sides": sides, "w": w, "tau_degrees": tau, "reversed": reversed, "radius": radius }),
    )?;
    tracing::info!(
        creases = doc.creases.len(),
        alpha_degrees = doc.alpha_degrees,
        sidecar = %sidecar.display(),
        "pattern_written"
    );
    Ok(())
}

#[derive(Serialize)]
struct TilingDoc {
    patch: String,
    rows: usize,
    cols: usize,
    scale: f64,
    lattice_vector_1: [f64; 2],
    lattice_vector_2: [f64; 2],
    ring: Vec<Vec<[f64; 2]>>,
    patch_polygons: Vec<Vec<[f64; 2]>>,
    polygons: Vec<Vec<[f64; 2]>>,
}

fn tiling(patch: String, rows: usize, cols: usize, scale: f64, out: PathBuf) -> Result<()> {
    tracing::info!(patch, rows, cols, scale, "tiling");
    let cfg = TilingCfg { rows, cols, scale };
    let tiling = Tiling::assemble_with(&patch, cfg)?;
    let (lv1, lv2) = tiling.lattice_vectors();

    let doc = TilingDoc {
        patch: patch.clone(),
        rows,
        cols,
        scale,
        lattice_vector_1: xy(lv1),
        lattice_vector_2: xy(lv2),
        ring: tiling.ring().iter().map(xy_loop).collect(),
        patch_polygons: tiling.patch_polygons().iter().map(xy_loop).collect(),
        polygons: tiling.polygons().iter().map(xy_loop).collect(),
    };
    let sidecar = artifact::write_with_provenance(
        &out,
        &doc,
        json!({ "patch": patch, "rows": rows, "cols": cols, "scale": scale }),
    )?;
    tracing::info!(
        polygons = doc.polygons.len(),
        sidecar = %sidecar.display(),
        "tiling_written"
    );
    Ok(())
}

fn list_patches() -> Result<()> {
    for patch in patches() {
        let figure: Vec<String> = patch.vertex_figure.iter().map(|n| n.to_string()).collect();
        println!(
            "{:<12} vertex figure {:<12} {} patch polygons",
            patch.name,
            figure.join("."),
            patch.polygons.len()
        );
    }
    Ok(())
}

fn xy_loop(polygon: &Polygon) -> Vec<[f64; 2]> {
    polygon.points().iter().map(|p| [p.x, p.y]).collect()
}

fn xy(v: Vec3<f64>) -> [f64; 2] {
    [v.x, v.y]
}
