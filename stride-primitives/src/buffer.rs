//! Buffer allocation and readback helpers.
//!
//! A `Buffer` is a slice of `Cell<u64>`. Kernels take their input and output
//! as shared references to buffers, so the same storage can be passed as both
//! (the in-place cases) and the setup and measured closures of a trial can
//! capture the same buffers at once.

use std::cell::Cell;

/// Contiguous, fixed-length `u64` storage that may alias itself.
pub type Buffer = [Cell<u64>];

/// Allocate a zeroed buffer of `len` elements.
pub fn alloc_buffer(len: usize) -> Box<Buffer> {
    (0..len).map(|_| Cell::new(0)).collect()
}

/// View an exclusively borrowed slice as a buffer.
pub fn as_buffer(values: &mut [u64]) -> &Buffer {
    Cell::from_mut(values).as_slice_of_cells()
}

/// Copy the first `len` elements of a buffer into a `Vec`.
pub fn read_buffer(buffer: &Buffer, len: usize) -> Vec<u64> {
    buffer[..len].iter().map(Cell::get).collect()
}

/// Cheap checksum over the valid prefix `buffer[..len]`.
///
/// Samples the first, middle and last elements. The measured closure of a
/// trial returns this value so the kernel's writes are observed.
pub fn observe(buffer: &Buffer, len: usize) -> u64 {
    if len == 0 {
        return 0;
    }
    let len = len.min(buffer.len());
    buffer[0]
        .get()
        .wrapping_add(buffer[len / 2].get())
        .wrapping_add(buffer[len - 1].get())
        .wrapping_add(len as u64)
}
