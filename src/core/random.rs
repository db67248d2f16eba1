//! Random sources for crop geometry.
//!
//! Geometry never reaches for a global generator; callers hand in a
//! `RandomSource`. Production runs use [`RngSource::from_entropy`], tests
//! use [`RngSource::seeded`] or replay exact draws with [`SequenceSource`].
//! A concurrent driver would give each worker its own source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// The two draws crop geometry needs.
pub trait RandomSource {
    /// Uniform float in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in [0, n). `n` must be at least 1.
    fn next_below(&mut self, n: u32) -> u32;
}

/// Adapter from any `rand::Rng`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    /// Unseeded thread-local generator; every run differs.
    pub fn from_entropy() -> Self {
        RngSource(rand::rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn next_below(&mut self, n: u32) -> u32 {
        self.0.random_range(0..n.max(1))
    }
}

/// Replays a fixed list of unit values in order, wrapping around at the end.
///
/// `next_f64` returns the value as is; `next_below(n)` maps it to
/// `floor(v * n)`, clamped to `n - 1`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect::<Vec<_>>();
        Self { values, pos: 0 }
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    fn next_value(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        self.next_value()
    }

    fn next_below(&mut self, n: u32) -> u32 {
        let n = n.max(1);
        let scaled = (self.next_value() * f64::from(n)) as u32;
        scaled.min(n - 1)
    }
}
