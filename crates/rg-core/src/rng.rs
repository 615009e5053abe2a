//! Deterministic per-cell RNG.
//!
//! # Determinism strategy
//!
//! Each grid cell gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (grid_number * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive grid numbers uniformly across the seed space.
//! This means:
//!
//! - Cells never share RNG state, so the walkability sampler draws the same
//!   point pairs for a cell whether cells run sequentially or on a Rayon
//!   pool, and regardless of how many other cells the district has.
//! - Re-running with the same global seed reproduces every output row
//!   bit-for-bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CellId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-cell deterministic RNG.
///
/// Create one per grid cell at the start of that cell's computation.  The
/// type is `!Sync` to prevent accidental sharing across threads; each cell
/// worker owns its own.
pub struct CellRng(SmallRng);

impl CellRng {
    /// Seed deterministically from the run's global seed and a grid number.
    pub fn new(global_seed: u64, cell: CellId) -> Self {
        let seed = global_seed ^ (cell.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CellRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
