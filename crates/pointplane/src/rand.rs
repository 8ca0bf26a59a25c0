//! Random vertex sequences (uniform coordinates + replay tokens).
//!
//! Purpose
//! - Produce reproducible "random shape" polylines for demos, benches and
//!   property checks: `n` vertices with coordinates drawn uniformly from
//!   half-open ranges, optionally closed back onto the first vertex.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the i-th shape of a run can be regenerated alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Half-open coordinate range `[start, end)`. Empty ranges collapse to `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordRange {
    pub start: i64,
    pub end: i64,
}

impl CoordRange {
    fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        if self.end <= self.start {
            self.start
        } else {
            rng.gen_range(self.start..self.end)
        }
    }
}

/// Random-shape configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    pub vertex_count: VertexCount,
    pub x_range: CoordRange,
    pub y_range: CoordRange,
    /// Append the first vertex at the end so the outline is closed.
    pub close: bool,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(10),
            x_range: CoordRange {
                start: 200,
                end: 500,
            },
            y_range: CoordRange {
                start: 200,
                end: 500,
            },
            close: false,
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
        // SplitMix64 finalizer over seed and index.
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

/// Draw a random vertex sequence. The same `(cfg, tok)` always yields the same vertices.
pub fn draw_random_shape(cfg: ShapeCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let mut vertices: Vec<Point> = (0..n)
        .map(|_| {
            let x = cfg.x_range.sample(&mut rng);
            let y = cfg.y_range.sample(&mut rng);
            Point::new(x, y)
        })
        .collect();
    if cfg.close {
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
    }
    vertices
}
