use rand::Rng;

pub mod config;

/// Source of randomness for sequence generation, shuffling and power-up
/// rolls. Every `rand::Rng` is one, so tests pass a seeded `StdRng`.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.gen::<f64>() < p
    }
}

/// Wall clock used to stamp score records.
pub trait Clock {
    /// Current time as an ISO-8601 string.
    fn now_iso(&self) -> String;
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.0.clone()
    }
}
