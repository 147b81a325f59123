use crate::{rng, SplitMix64};

/// One pre-tick event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickContext {
    pub tick: u64,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64) -> Self {
        Self { tick, seed: 0 }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The context for the following simulation step.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            seed: self.seed,
        }
    }

    /// Deterministic RNG for this tick. Different `stream`s never share a sequence.
    pub fn rng(&self, stream: u64) -> SplitMix64 {
        SplitMix64::new(rng::derive_seed(self.seed, self.tick, stream))
    }
}
