//! CSC format definitions and constructors

use crate::alloc::try_filled;
use crate::error::{Result, SparseError};
use crate::index::SpIndex;
use crate::labels::DimNames;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Csc<T, I> {
    pub data: Vec<T>,
    pub indices: Vec<I>, // row indices per column
    pub indptr: Vec<I>,  // column pointer, length ncols + 1
    pub ncols: usize,
    pub nrows: usize,
    pub names: DimNames,
}

/// Narrow-index CSC, for matrices whose nnz fits a 32-bit count.
pub type Csc32<T = f64> = Csc<T, i32>;
/// Wide-index CSC.
pub type Csc64<T = f64> = Csc<T, i64>;

impl<T, I> Csc<T, I> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    #[must_use]
    pub fn with_names_unchecked(mut self, names: DimNames) -> Self {
        self.names = names;
        self
    }
}

impl<T, I: SpIndex> Csc<T, I> {
    /// Stored entry count, read from `indptr[ncols]`.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indptr.last().map_or(0, |p| p.index())
    }

    /// Build from raw parts.
    ///
    /// Array lengths and the first/last `indptr` entries are always checked.
    /// With `check` set, the canonical form is verified as well (see [`Csc::validate`]).
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<I>,
        indices: Vec<I>,
        data: Vec<T>,
        check: bool,
    ) -> Result<Self> {
        check_structure(ncols, &indptr, indices.len(), data.len())?;
        if check {
            check_canonical(nrows, ncols, &indptr, &indices)?;
        }
        Ok(Self::from_parts_unchecked(nrows, ncols, indptr, indices, data))
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        indptr: Vec<I>,
        indices: Vec<I>,
        data: Vec<T>,
    ) -> Self {
        Self {
            data,
            indices,
            indptr,
            ncols,
            nrows,
            names: DimNames {
                rows: None,
                cols: None,
            },
        }
    }

    /// An `nrows x ncols` matrix with no stored entries.
    pub fn empty(nrows: usize, ncols: usize) -> Result<Self> {
        let len = ncols
            .checked_add(1)
            .ok_or(SparseError::IndexOverflow {
                value: ncols,
                width: usize::BITS,
            })?;
        let indptr = try_filled(len, I::ZERO)?;
        Ok(Self::from_parts_unchecked(
            nrows,
            ncols,
            indptr,
            Vec::new(),
            Vec::new(),
        ))
    }

    /// Attach labels, checking their lengths against the shape.
    pub fn with_names(self, names: DimNames) -> Result<Self> {
        names.check_shape(self.nrows, self.ncols)?;
        Ok(self.with_names_unchecked(names))
    }

    /// Verify the canonical-form invariant: monotone `indptr`, row indices in
    /// bounds and strictly increasing within every column. O(nnz + ncols).
    pub fn validate(&self) -> Result<()> {
        check_structure(self.ncols, &self.indptr, self.indices.len(), self.data.len())?;
        check_canonical(self.nrows, self.ncols, &self.indptr, &self.indices)?;
        self.names.check_shape(self.nrows, self.ncols)
    }

    /// Row indices and values of column `j`.
    #[must_use]
    pub fn column(&self, j: usize) -> Option<(&[I], &[T])> {
        if j >= self.ncols {
            return None;
        }
        let s = self.indptr[j].index();
        let e = self.indptr[j + 1].index();
        Some((&self.indices[s..e], &self.data[s..e]))
    }

    /// Stored entries as `(col, row, value)` in storage order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> Entries<'_, T, I> {
        Entries {
            indptr: &self.indptr,
            indices: &self.indices,
            data: &self.data,
            pos: 0,
            end: self.nnz(),
            col: 0,
        }
    }
}

/// Iterator over stored entries, tracking the current column by comparing the
/// running position against the next column boundary.
#[derive(Debug, Clone)]
pub struct Entries<'a, T, I> {
    indptr: &'a [I],
    indices: &'a [I],
    data: &'a [T],
    pos: usize,
    end: usize,
    col: usize,
}

impl<'a, T, I: SpIndex> Iterator for Entries<'a, T, I> {
    type Item = (usize, usize, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        while self.pos >= self.indptr[self.col + 1].index() {
            self.col += 1;
        }
        let p = self.pos;
        self.pos += 1;
        Some((self.col, self.indices[p].index(), &self.data[p]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.pos;
        (n, Some(n))
    }
}

impl<T, I: SpIndex> ExactSizeIterator for Entries<'_, T, I> {}

fn check_structure<I: SpIndex>(
    ncols: usize,
    indptr: &[I],
    n_indices: usize,
    n_data: usize,
) -> Result<()> {
    let Some(expected) = ncols.checked_add(1) else {
        return Err(SparseError::IndptrLength {
            len: indptr.len(),
            expected: usize::MAX,
        });
    };
    if indptr.len() != expected {
        return Err(SparseError::IndptrLength {
            len: indptr.len(),
            expected,
        });
    }
    if n_indices != n_data {
        return Err(SparseError::LengthMismatch {
            indices: n_indices,
            data: n_data,
        });
    }
    let first = indptr[0];
    if first != I::ZERO {
        return Err(SparseError::IndptrStart {
            first: first.to_i64(),
        });
    }
    let last = indptr[ncols];
    if last.try_index() != Some(n_indices) {
        return Err(SparseError::IndptrEnd {
            last: last.to_i64(),
            nnz: n_indices,
        });
    }
    Ok(())
}

fn check_canonical<I: SpIndex>(
    nrows: usize,
    ncols: usize,
    indptr: &[I],
    indices: &[I],
) -> Result<()> {
    for col in 0..ncols {
        let (s_i, e_i) = (indptr[col], indptr[col + 1]);
        if e_i < s_i {
            return Err(SparseError::IndptrDecreasing {
                col,
                start: s_i.to_i64(),
                end: e_i.to_i64(),
            });
        }
        // indptr[0] == 0 and monotone so far, so both ends are non-negative
        let (start, end) = (s_i.index(), e_i.index());
        if end > indices.len() {
            return Err(SparseError::IndptrOutOfRange {
                col,
                value: e_i.to_i64(),
                nnz: indices.len(),
            });
        }
        let mut prev: Option<usize> = None;
        for (position, &r) in indices[start..end].iter().enumerate() {
            let Some(row) = r.try_index() else {
                return Err(SparseError::NegativeIndex {
                    value: r.to_i64(),
                    position: start + position,
                });
            };
            if row >= nrows {
                return Err(SparseError::RowOutOfBounds { col, row, nrows });
            }
            if prev.is_some_and(|p| row <= p) {
                return Err(SparseError::UnsortedRows {
                    col,
                    position: start + position,
                });
            }
            prev = Some(row);
        }
    }
    Ok(())
}
