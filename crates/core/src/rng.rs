//! RNG module - seedable source of stress deltas
//!
//! The stress updater never reaches for global random state. It takes any
//! [`DeltaSource`], which lets the binary seed from the clock while tests
//! inject a fixed seed or a scripted sequence.
//!
//! [`SimpleRng`] is a small LCG, deterministic for a given seed.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed integer deltas
pub trait DeltaSource {
    /// Uniform integer in `lo..=hi`
    fn next_in(&mut self, lo: i32, hi: i32) -> i32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; draw from the high half.
        (self.next_u32() >> 16) % max
    }
}

impl DeltaSource for SimpleRng {
    fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the current time, folded into 32 bits
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}
