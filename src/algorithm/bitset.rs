use bitvec::prelude::*;
use std::fmt;

/// Fixed-size visited marker over a grid's cells
///
/// Indexed by `[row, col]` in row-major order. One set is shared by a whole
/// extraction scan so that every cell is visited at most once.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
}

impl VisitedSet {
    /// Create a set with no cells marked
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            cols,
        }
    }

    fn offset(&self, index: [usize; 2]) -> Option<usize> {
        (index[1] < self.cols).then(|| index[0] * self.cols + index[1])
    }

    /// Mark a cell, returning `true` if it was not marked before
    ///
    /// Indices outside the grid are never marked and return `false`.
    pub fn insert(&mut self, index: [usize; 2]) -> bool {
        let Some(offset) = self.offset(index) else {
            return false;
        };
        match self.bits.get_mut(offset) {
            Some(mut bit) => !bit.replace(true),
            None => false,
        }
    }

    /// Test whether a cell is marked
    pub fn contains(&self, index: [usize; 2]) -> bool {
        self.offset(index)
            .and_then(|offset| self.bits.get(offset).as_deref().copied())
            .unwrap_or(false)
    }

    /// Count marked cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cell is marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitedSet({} of {} cells)", self.count(), self.bits.len())
    }
}
