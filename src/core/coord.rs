//! Grid extent and coordinate checking.
//!
//! Callers address cells with signed `i64` coordinates so that a request like
//! `(-1, 0)` is reportable as out of bounds instead of being unrepresentable.
//! Inside the crate, cells are addressed by validated `usize` pairs.

use super::error::{LifeError, Result};

/// Fixed extent of a grid.
///
/// Only `Dimensions::new` builds one, so both extents are positive and the
/// cell count fits in a single allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Validate a requested extent.
    ///
    /// Fails with `InvalidDimensions` if either extent is non-positive or the
    /// cell count `rows * cols` overflows the addressable size.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let invalid = || LifeError::InvalidDimensions { rows, cols };
        if rows <= 0 || cols <= 0 {
            return Err(invalid());
        }
        let r = usize::try_from(rows).map_err(|_| invalid())?;
        let c = usize::try_from(cols).map_err(|_| invalid())?;
        match r.checked_mul(c) {
            Some(area) if area <= isize::MAX as usize => Ok(Self { rows: r, cols: c }),
            _ => Err(invalid()),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells. Cannot overflow; `new` checked it.
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Check a caller-supplied coordinate and convert it to unsigned form.
    pub fn check(self, row: i64, col: i64) -> Result<(usize, usize)> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.cols => Ok((r, c)),
            _ => Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Row-major index of an in-bounds cell.
    #[inline]
    #[must_use]
    pub const fn index(self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl From<Dimensions> for (usize, usize) {
    fn from(dims: Dimensions) -> Self {
        (dims.rows, dims.cols)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
