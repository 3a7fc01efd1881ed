//! Fallible buffer allocation
//!
//! Kernels size their outputs exactly before the scatter pass. These helpers
//! turn an allocator refusal into [`SparseError::Allocation`] instead of an abort.

use crate::error::{Result, SparseError};

/// Allocate `len` copies of `value`.
#[inline]
pub fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| SparseError::Allocation { elements: len })?;
    v.resize(len, value);
    Ok(v)
}

/// Copy a slice into a freshly allocated vector.
#[inline]
pub fn try_copied<T: Copy>(src: &[T]) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(src.len())
        .map_err(|_| SparseError::Allocation {
            elements: src.len(),
        })?;
    v.extend_from_slice(src);
    Ok(v)
}

/// Number of cells in an `nrows x ncols` dense buffer.
#[inline]
pub fn dense_len(nrows: usize, ncols: usize) -> Result<usize> {
    nrows
        .checked_mul(ncols)
        .ok_or(SparseError::ShapeOverflow { nrows, ncols })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_requests_fail_cleanly() {
        assert_eq!(
            try_filled(usize::MAX, 0u8),
            Err(SparseError::Allocation {
                elements: usize::MAX
            })
        );
        assert!(dense_len(usize::MAX, 2).is_err());
        assert_eq!(dense_len(0, usize::MAX), Ok(0));
        assert_eq!(try_filled(3, 0.0f64), Ok(vec![0.0; 3]));
    }
}
