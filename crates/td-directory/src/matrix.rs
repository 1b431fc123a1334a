//! Dense row-major square tables indexed by stop id pairs.
//!
//! All three directory tables (road distances, geo distances, journey
//! records) are `N×N` flat allocations with `row·N + col` addressing.  `N` is
//! finalized before any table is allocated — the builder partitions stop
//! items ahead of bus items, so the stop count is known up front.

use std::ops::{Index, IndexMut};

use td_core::StopId;

/// A flat `dim × dim` table of `T`.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Allocate a `dim × dim` table with every cell set to `value`.
    pub fn filled(dim: usize, value: T) -> Self {
        Self {
            dim,
            cells: vec![value; dim * dim],
        }
    }
}

impl<T> SquareMatrix<T> {
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row-major cell slice, for whole-table scans.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    fn offset(&self, row: StopId, col: StopId) -> usize {
        row.index() * self.dim + col.index()
    }
}

impl<T> Index<(StopId, StopId)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (StopId, StopId)) -> &T {
        &self.cells[self.offset(row, col)]
    }
}

impl<T> IndexMut<(StopId, StopId)> for SquareMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (StopId, StopId)) -> &mut T {
        let i = self.offset(row, col);
        &mut self.cells[i]
    }
}
