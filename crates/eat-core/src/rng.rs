//! Deterministic RNG used by simulated hosts.
//!
//! Small and dependency-free so replays stay bit-identical across platforms. Not cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `[0, 1)` with 24 bits of precision.
    fn next_f32_unit(&mut self) -> f32 {
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    /// Uniform value in `0..bound`; `bound == 0` yields 0.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32_unit() < p.clamp(0.0, 1.0)
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Combine a run seed, a tick number and a stream tag into one seed.
pub fn derive_seed(run_seed: u64, tick: u64, stream: u64) -> u64 {
    mix64(run_seed ^ mix64(tick.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream))
}
