//! Stochastic mechanics: uniform draws for seeded stock generation.
//! Note: takes `bevy_prng::WyRand` by `&mut`; callers own the seed.

use std::ops::RangeInclusive;

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// WyRand seeded from a `u64`.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform integer in `range` (inclusive). An empty range yields its start.
#[inline]
pub fn uniform_i32(rng: &mut WyRand, range: &RangeInclusive<i32>) -> i32 {
    let (lo, hi) = (*range.start(), *range.end());
    if hi <= lo {
        return lo;
    }
    let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
    let offset = rng.next_u64() % span;
    (i64::from(lo) + offset as i64) as i32
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn pick_index(rng: &mut WyRand, len: usize) -> usize {
    (rng.next_u64() % len as u64) as usize
}
