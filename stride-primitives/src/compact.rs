//! Sequential stream compaction with a bitmask predicate.

use crate::buffer::Buffer;
use crate::predicate::predicate;

/// Copy every `input` value satisfying `predicate(mask, value)` to the front
/// of `output`, preserving order. Returns the number of values written.
///
/// `output[count..]` is left untouched. The write cursor never passes the
/// read cursor, so `input` and `output` may be the same buffer.
pub fn compact(mask: u64, input: &Buffer, output: &Buffer) -> usize {
    debug_assert!(output.len() >= input.len());
    let mut written = 0;
    for cell in input {
        let value = cell.get();
        if predicate(mask, value) {
            output[written].set(value);
            written += 1;
        }
    }
    written
}
