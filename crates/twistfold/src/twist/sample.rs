//! Deterministic random twist-tile inputs for tests and benches.
//!
//! Draws a polygon arity, a segment ratio strictly inside (0, 1), and a tilt
//! angle from configurable ranges. A `(seed, index)` replay token seeds the
//! RNG so any individual draw can be reproduced from its index alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{TwistParams, TwistTile};
use crate::error::GeomError;
use crate::geom::Polygon;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Inclusive arity range of the base polygon.
    pub min_sides: usize,
    pub max_sides: usize,
    /// Margin keeping `w` away from the open interval's endpoints.
    pub w_margin: f64,
    /// Symmetric tilt range: τ ∈ (−tau_max, tau_max) radians.
    pub tau_max: f64,
    /// Circumradius of the base polygon.
    pub radius: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            min_sides: 3,
            max_sides: 12,
            w_margin: 0.05,
            tau_max: std::f64::consts::PI,
            radius: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // Golden-ratio stride keeps consecutive indices decorrelated.
        StdRng::seed_from_u64(self.seed ^ self.index.wrapping_mul(0x9e37_79b9_7f4a_7c15))
    }
}

/// Draw one (base polygon, parameters) pair.
pub fn draw_twist_input(
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<(Polygon, TwistParams), GeomError> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min_sides.max(3);
    let hi = cfg.max_sides.max(lo);
    let sides = rng.gen_range(lo..=hi);
    let margin = cfg.w_margin.clamp(1e-6, 0.49);
    let w = rng.gen_range(margin..(1.0 - margin));
    let span = cfg.tau_max.max(1e-9);
    let tau = rng.gen_range(-span..span);
    let polygon = Polygon::regular(cfg.radius.max(1e-9), sides)?;
    let params = TwistParams {
        w,
        tau,
        reversed: rng.gen::<bool>(),
    };
    Ok((polygon, params))
}

/// Draw a complete twist tile.
pub fn draw_twist_tile(cfg: SampleCfg, tok: ReplayToken) -> Result<TwistTile, GeomError> {
    let (polygon, params) = draw_twist_input(cfg, tok)?;
    TwistTile::new(&polygon, params)
}
