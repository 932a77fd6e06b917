use rand::rngs::ThreadRng;
use rand::Rng;

use crate::die::DieValue;

/// Source of die values. Pure: rolling has no effect beyond the RNG state.
pub trait Roller {
    fn roll(&mut self) -> DieValue;
}

/// Uniform roller over any `rand` generator.
pub struct RngRoller<R = ThreadRng> {
    rng: R,
}

impl RngRoller<ThreadRng> {
    /// Thread-local generator seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> RngRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngRoller<ThreadRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll(&mut self) -> DieValue {
        DieValue::ALL[self.rng.random_range(0..DieValue::ALL.len())]
    }
}
