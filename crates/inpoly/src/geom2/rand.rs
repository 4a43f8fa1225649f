//! Random simple rings and point clouds (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests and benches of the containment
//!   testers. Every draw is addressed by a `(seed, index)` replay token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter. Sorted angles with positive radii give a star-shaped,
//!   hence simple, ring around the origin.
//! - `draw_convex_ring` takes the convex hull of the same draw.

use super::ring::CyclicRing;
use super::types::Extent;
use super::util::convex_hull;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Emit vertices clockwise (the convention of the reference algorithms).
    pub clockwise: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            clockwise: true,
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
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_vertices(cfg: RadialCfg, rng: &mut StdRng) -> Vec<Vector2<f64>> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    let mut pts: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    if cfg.clockwise {
        pts.reverse();
    }
    pts
}

/// Draw a star-shaped simple ring around the origin.
pub fn draw_ring_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<CyclicRing> {
    let mut rng = tok.to_std_rng();
    CyclicRing::new(radial_vertices(cfg, &mut rng)).ok()
}

/// Convex hull of a radial draw. None if the hull degenerates.
pub fn draw_convex_ring(cfg: RadialCfg, tok: ReplayToken) -> Option<CyclicRing> {
    let mut rng = tok.to_std_rng();
    let mut hull = convex_hull(&radial_vertices(cfg, &mut rng))?;
    if cfg.clockwise {
        hull.reverse();
    }
    CyclicRing::new(hull).ok()
}

/// `n` points uniform in `extent` grown by `margin` on every side.
pub fn draw_points(extent: Extent, n: usize, margin: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let box_ = extent.expanded(margin);
    (0..n)
        .map(|_| {
            Vector2::new(
                box_.min.x + rng.gen::<f64>() * box_.width(),
                box_.min.y + rng.gen::<f64>() * box_.height(),
            )
        })
        .collect()
}
