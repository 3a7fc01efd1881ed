//! Row-major dense matrix returned by the densify kernels

use crate::alloc::{dense_len, try_filled};
use crate::error::Result;
use crate::labels::DimNames;

#[derive(Debug, Clone, PartialEq)]
pub struct Dense<T> {
    pub nrows: usize,
    pub ncols: usize,
    /// Row-major cells, `data[r * ncols + c]`.
    pub data: Vec<T>,
    pub names: DimNames,
}

impl<T: Copy + Default> Dense<T> {
    /// Zero (`T::default()`) filled `nrows x ncols` buffer.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        let len = dense_len(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            data: try_filled(len, T::default())?,
            names: DimNames::default(),
        })
    }
}

impl<T: Copy> Dense<T> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        Some(self.data[row * self.ncols + col])
    }

    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.nrows {
            return None;
        }
        let s = row * self.ncols;
        Some(&self.data[s..s + self.ncols])
    }

    /// Rows as nested vectors; handy for comparisons in tests and bindings.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.nrows)
            .map(|r| self.data[r * self.ncols..(r + 1) * self.ncols].to_vec())
            .collect()
    }
}

impl<T: Copy + Default + PartialEq> Dense<T> {
    /// Number of cells different from `T::default()`.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        let zero = T::default();
        self.data.iter().filter(|&&v| v != zero).count()
    }
}
