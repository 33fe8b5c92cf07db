//! Bitmask predicate used by the compaction kernel.

/// Mask retaining roughly one in `ratio` uniformly distributed values.
///
/// `ratio` should be a power of two; the mask is `ratio - 1`.
pub const fn mask_for_ratio(ratio: u64) -> u64 {
    ratio.saturating_sub(1)
}

/// True when every bit of `mask` is set in `value`.
#[inline(always)]
pub fn predicate(mask: u64, value: u64) -> bool {
    value & mask == mask
}
