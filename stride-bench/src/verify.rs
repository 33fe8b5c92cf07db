//! One-off correctness check of a kernel's output against a plain reference
//! computed on a fresh copy of the input.

use stride_primitives::{as_buffer, fill_with, mask_for_ratio, predicate, Buffer, FillPattern, Shape};

use crate::driver::TestCase;

/// Compare `result[..len]` with the reference output for `test_case`.
pub fn check(
    test_case: TestCase,
    shape: Shape,
    fill: FillPattern,
    result: &Buffer,
    len: usize,
) -> Result<(), String> {
    let mut input = vec![0u64; shape.size()];
    fill_with(fill, as_buffer(&mut input));
    let expected = reference(test_case, shape, &input);

    if len != expected.len() {
        return Err(format!(
            "length mismatch: kernel={}, reference={}",
            len,
            expected.len()
        ));
    }

    match result[..len]
        .iter()
        .zip(&expected)
        .position(|(cell, &want)| cell.get() != want)
    {
        Some(idx) => Err(format!(
            "first mismatch at index {}: kernel={}, reference={}",
            idx,
            result[idx].get(),
            expected[idx]
        )),
        None => Ok(()),
    }
}

fn reference(test_case: TestCase, shape: Shape, input: &[u64]) -> Vec<u64> {
    if let Some(ratio) = test_case.compaction_ratio() {
        let mask = mask_for_ratio(ratio);
        return input.iter().copied().filter(|&v| predicate(mask, v)).collect();
    }

    let row_length = if test_case.is_multidim() {
        shape.row_length()
    } else {
        shape.size()
    };
    input
        .chunks(row_length)
        .flat_map(|row| {
            row.iter().scan(0u64, |acc, &v| {
                *acc = acc.wrapping_add(v);
                Some(*acc)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_primitives::{alloc_buffer, fill, scan, scan2d};

    #[test]
    fn test_scan_passes() {
        let shape = Shape::new(1_000, 100, 10).unwrap();
        let input = alloc_buffer(1_000);
        let output = alloc_buffer(1_000);
        fill(&input);
        scan(&input, &output);
        assert!(check(TestCase::ScanSequential, shape, FillPattern::IndexHash, &output, 1_000).is_ok());
    }

    #[test]
    fn test_multidim_reference_is_per_row() {
        let shape = Shape::new(1_000, 100, 10).unwrap();
        let input = alloc_buffer(1_000);
        let output = alloc_buffer(1_000);
        fill(&input);
        scan2d(shape, &input, &output);
        assert!(check(TestCase::ScanMultidimSequential, shape, FillPattern::IndexHash, &output, 1_000).is_ok());
        // A flat scan is not a row-wise scan.
        assert!(check(TestCase::ScanSequential, shape, FillPattern::IndexHash, &output, 1_000).is_err());
    }

    #[test]
    fn test_detects_corruption() {
        let shape = Shape::flat(100).unwrap();
        let input = alloc_buffer(100);
        let output = alloc_buffer(100);
        fill(&input);
        scan(&input, &output);
        output[37].set(output[37].get() + 1);
        let err = check(TestCase::ScanSequential, shape, FillPattern::IndexHash, &output, 100).unwrap_err();
        assert!(err.contains("index 37"), "{}", err);
    }

    #[test]
    fn test_compact_length_mismatch() {
        let shape = Shape::flat(64).unwrap();
        let output = alloc_buffer(64);
        let err = check(TestCase::Compact8Sequential, shape, FillPattern::IndexHash, &output, 64).unwrap_err();
        assert!(err.starts_with("length mismatch"), "{}", err);
    }
}
