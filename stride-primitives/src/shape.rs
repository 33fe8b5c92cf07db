//! Validated row layout of a flat buffer.

/// Errors produced while validating a buffer shape.
///
/// The `Display` strings are the diagnostics printed by the driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A dimension was zero or negative.
    #[error("{field} should be positive.")]
    NonPositive { field: &'static str, value: i64 },

    /// `row_length * row_count` does not equal `size` (or overflows).
    #[error("combination of row-count and row-length should match the input-size")]
    Mismatch {
        size: i64,
        row_length: i64,
        row_count: i64,
    },
}

/// `(size, row_length, row_count)` with `row_length * row_count == size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    row_length: usize,
    row_count: usize,
}

impl Shape {
    /// Validate the three dimensions, checking them in the order
    /// size, row length, row count, then their product.
    pub fn new(size: i64, row_length: i64, row_count: i64) -> Result<Self, ShapeError> {
        let size_u = require_positive("input-size", size)?;
        let row_length_u = require_positive("row-length", row_length)?;
        let row_count_u = require_positive("row-count", row_count)?;

        match row_length_u.checked_mul(row_count_u) {
            Some(product) if product == size_u => Ok(Self {
                size: size_u,
                row_length: row_length_u,
                row_count: row_count_u,
            }),
            _ => Err(ShapeError::Mismatch {
                size,
                row_length,
                row_count,
            }),
        }
    }

    /// A single row spanning `size` elements. `size` must be non-zero.
    pub fn flat(size: usize) -> Result<Self, ShapeError> {
        if size == 0 {
            return Err(ShapeError::NonPositive {
                field: "input-size",
                value: 0,
            });
        }
        Ok(Self {
            size,
            row_length: size,
            row_count: 1,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row_length(&self) -> usize {
        self.row_length
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

/// Check a single dimension, naming it in the error.
pub fn require_positive(field: &'static str, value: i64) -> Result<usize, ShapeError> {
    if value <= 0 {
        return Err(ShapeError::NonPositive { field, value });
    }
    usize::try_from(value).map_err(|_| ShapeError::NonPositive { field, value })
}
