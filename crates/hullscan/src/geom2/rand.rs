//! Random point clouds in 2D (shape presets + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for hull inputs used by tests,
//!   benches and the CLI `sample` command.
//!
//! Model
//! - A `CloudShape` fixes the distribution; `draw_cloud` draws `n` points from
//!   it. Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th cloud of a run can be reproduced without replaying the others.
//! - `Circle` places most points on the hull (stress for output size);
//!   `Collinear` and `Lattice` stress the tolerance and duplicate handling.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::types::Point;

/// Point distribution of a random cloud.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CloudShape {
    /// Uniform in `[-half_width, half_width]²`.
    UniformBox { half_width: f64 },
    /// Uniform in the disk of the given radius.
    Disk { radius: f64 },
    /// Near the circle: radius `radius * (1 + u)`, `u ∈ [-jitter, 0]`.
    Circle { radius: f64, jitter: f64 },
    /// On the segment from the origin to `(length, length / 2)`.
    Collinear { length: f64 },
    /// Integer lattice `{0..side}²`, drawn with replacement (duplicates likely).
    Lattice { side: u32 },
}

impl Default for CloudShape {
    fn default() -> Self {
        CloudShape::UniformBox { half_width: 1.0 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same run.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw `n` points from `shape`.
pub fn draw_cloud(shape: CloudShape, n: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| sample_one(shape, &mut rng)).collect()
}

fn sample_one<R: Rng>(shape: CloudShape, rng: &mut R) -> Point {
    match shape {
        CloudShape::UniformBox { half_width } => {
            let h = half_width.abs().max(1e-12);
            Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
        }
        CloudShape::Disk { radius } => {
            let r0 = radius.abs().max(1e-12);
            // sqrt for area-uniform radii
            let r = r0 * rng.gen::<f64>().sqrt();
            polar(r, rng.gen::<f64>() * std::f64::consts::TAU)
        }
        CloudShape::Circle { radius, jitter } => {
            let r0 = radius.abs().max(1e-12);
            let j = jitter.clamp(0.0, 1.0);
            let r = r0 * (1.0 - rng.gen::<f64>() * j);
            polar(r, rng.gen::<f64>() * std::f64::consts::TAU)
        }
        CloudShape::Collinear { length } => {
            let t = rng.gen::<f64>() * length;
            Vector2::new(t, t * 0.5)
        }
        CloudShape::Lattice { side } => {
            let s = side.max(1);
            Vector2::new(rng.gen_range(0..s) as f64, rng.gen_range(0..s) as f64)
        }
    }
}

#[inline]
fn polar(r: f64, theta: f64) -> Point {
    Vector2::new(r * theta.cos(), r * theta.sin())
}
