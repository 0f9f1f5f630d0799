//! Storage for one generation.
//!
//! ## CellBuffer
//!
//! Row-major `Vec<bool>` with O(1) access by `(row, col)`. Also owns the
//! bounded Moore-neighborhood count and the per-cell transition kernel, since
//! both only ever read one frozen buffer.
//!
//! Coordinates here are already validated `usize` pairs; the engine checks
//! caller input before it reaches a buffer.

use std::ops::{Index, IndexMut};

use crate::core::Dimensions;
use crate::rules::TransitionRule;

/// Offsets of the eight Moore neighbors, `(0, 0)` excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One generation of cell liveness.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellBuffer {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl CellBuffer {
    /// Create an all-dead buffer.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.area()],
        }
    }

    /// Extent of this buffer.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Liveness of an in-bounds cell.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.dims.index(row, col)]
    }

    /// Set liveness of an in-bounds cell.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.dims.index(row, col);
        self.cells[index] = alive;
    }

    /// Set every cell to the same state.
    pub fn fill(&mut self, alive: bool) {
        self.cells.fill(alive);
    }

    /// Overwrite every cell, in row-major order, from a generator.
    pub fn fill_with(&mut self, mut f: impl FnMut() -> bool) {
        for cell in &mut self.cells {
            *cell = f();
        }
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over live cell coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.dims.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Count live Moore neighbors of an in-bounds cell.
    ///
    /// Positions outside the grid do not exist and are not counted, so edge
    /// cells have 5 candidates and corner cells 3.
    #[must_use]
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if r < self.dims.rows() && c < self.dims.cols() && self.get(r, c) {
                count += 1;
            }
        }
        count
    }

    /// Compute the next generation of `self` into `next`.
    ///
    /// `self` is only read, so every next state sees the same frozen
    /// generation. Every cell of `next` is overwritten.
    pub fn advance_into<R: TransitionRule + ?Sized>(&self, rule: &R, next: &mut CellBuffer) {
        debug_assert_eq!(self.dims, next.dims, "scratch buffer shape mismatch");

        for row in 0..self.dims.rows() {
            for col in 0..self.dims.cols() {
                let neighbors = self.neighbor_count(row, col);
                next.set(row, col, rule.next_state(self.get(row, col), neighbors));
            }
        }
    }
}

impl Index<(usize, usize)> for CellBuffer {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[self.dims.index(row, col)]
    }
}

impl IndexMut<(usize, usize)> for CellBuffer {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let index = self.dims.index(row, col);
        &mut self.cells[index]
    }
}
