//! RNG module - uniform picks for snippet selection
//!
//! A small LCG is all the sequencer needs: picks only have to look random to a
//! viewer, and a fixed seed makes selection reproducible in tests.

use std::time::{SystemTime, UNIX_EPOCH};

/// 64-bit LCG (Knuth MMIX constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // Avoid 0 seed which would produce a short first cycle
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the system clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform index in `[0, len)`, or None for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        // High bits of an LCG are the well-mixed ones.
        let hi = self.next_u64() >> 32;
        Some(((hi * len as u64) >> 32) as usize)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).map(|i| &items[i])
    }
}
