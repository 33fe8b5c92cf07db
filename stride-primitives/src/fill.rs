//! Deterministic buffer initialization.
//!
//! The default pattern hashes each index with one xorshift-64 step and keeps
//! the low 32 bits, so values look random to the optimizer while every fill of
//! the same length produces the same buffer. Values stay below 2^32 so running
//! sums over any realistic buffer size do not wrap.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::buffer::Buffer;

/// How a buffer is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPattern {
    /// `xorshift(index)` truncated to 32 bits.
    #[default]
    IndexHash,
    /// Uniform `u32` values drawn from a ChaCha8 stream with this seed.
    Seeded(u64),
}

/// Fill `buffer` with the default index-hash pattern.
pub fn fill(buffer: &Buffer) {
    for (idx, cell) in buffer.iter().enumerate() {
        cell.set(index_hash(idx as u64));
    }
}

/// Fill `buffer` with the given pattern.
pub fn fill_with(pattern: FillPattern, buffer: &Buffer) {
    match pattern {
        FillPattern::IndexHash => fill(buffer),
        FillPattern::Seeded(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for cell in buffer {
                cell.set(rng.gen::<u32>() as u64);
            }
        }
    }
}

#[inline]
fn index_hash(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x as u32 as u64
}
