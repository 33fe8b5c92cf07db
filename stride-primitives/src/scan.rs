//! Sequential inclusive prefix sums.
//!
//! Input and output may be the same buffer. The running total lives in a
//! local accumulator and `output[i - 1]` is never read back, so an in-place
//! scan sees each input value before it is overwritten.

use crate::buffer::Buffer;
use crate::shape::Shape;

/// Inclusive scan starting from `initial`. Returns the final total.
///
/// `output[i] = initial + input[0] + ... + input[i]`, wrapping on overflow.
pub fn scan_from(initial: u64, input: &Buffer, output: &Buffer) -> u64 {
    debug_assert_eq!(input.len(), output.len());
    let mut accum = initial;
    for (src, dst) in input.iter().zip(output) {
        accum = accum.wrapping_add(src.get());
        dst.set(accum);
    }
    accum
}

/// Inclusive scan over the whole buffer. Returns the sum of `input`.
pub fn scan(input: &Buffer, output: &Buffer) -> u64 {
    scan_from(0, input, output)
}

/// Scan each row of `shape` independently, in row order.
///
/// The accumulator restarts at zero on every row, so no row depends on the
/// previous row's output.
pub fn scan2d(shape: Shape, input: &Buffer, output: &Buffer) {
    let size = shape.size();
    let row_length = shape.row_length();
    let rows = input[..size]
        .chunks_exact(row_length)
        .zip(output[..size].chunks_exact(row_length));
    for (src, dst) in rows {
        scan_from(0, src, dst);
    }
}
