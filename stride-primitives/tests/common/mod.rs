#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `n` random values below 2^32.
pub fn random_values(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = seeded_rng(seed);
    (0..n).map(|_| rng.gen::<u32>() as u64).collect()
}

/// Straightforward inclusive prefix sum.
pub fn reference_scan(values: &[u64]) -> Vec<u64> {
    values
        .iter()
        .scan(0u64, |acc, &v| {
            *acc = acc.wrapping_add(v);
            Some(*acc)
        })
        .collect()
}

/// Straightforward filter with the same bit test as the compaction kernel.
pub fn reference_compact(mask: u64, values: &[u64]) -> Vec<u64> {
    values.iter().copied().filter(|v| v & mask == mask).collect()
}
