//! CSC -> dense scatter, plain and fused with a transpose.
//!
//! Both kernels zero-fill the output and walk the stored entries once. The
//! transposed variant writes `dense[c][r]` directly, which saves the full
//! counting-sort pass that `to_dense(transpose(a))` would pay for.

use crate::options::KernelOptions;
use crate::util::{precheck, tile_range};
use rayon::prelude::*;
use sparsecol_core::{Csc, Dense, Result, SpIndex};

/// Densify with default [`KernelOptions`].
pub fn to_dense<T, I>(a: &Csc<T, I>) -> Result<Dense<T>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    to_dense_with(a, &KernelOptions::default())
}

/// Densify the transpose with default [`KernelOptions`].
pub fn to_dense_transposed<T, I>(a: &Csc<T, I>) -> Result<Dense<T>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    to_dense_transposed_with(a, &KernelOptions::default())
}

/// Expand `a` into an `nrows × ncols` row-major buffer.
///
/// # Errors
/// [`sparsecol_core::SparseError::ShapeOverflow`] or `Allocation` when the
/// dense buffer cannot be sized, or a validation error when `opts.validate` is set.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(nrows = a.nrows, ncols = a.ncols, nnz = a.nnz())
)]
pub fn to_dense_with<T, I>(a: &Csc<T, I>, opts: &KernelOptions) -> Result<Dense<T>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    precheck(a, opts)?;
    let mut out = Dense::zeros(a.nrows, a.ncols)?;
    let (nrows, ncols) = (a.nrows, a.ncols);

    let tiles = opts.tiles(a.nnz(), ncols);
    if tiles > 1 {
        tracing::debug!(tiles, "tiled densify");
        let tile_cols = ncols.div_ceil(tiles);
        let pd_addr = out.data.as_mut_ptr() as usize;
        (0..tiles).into_par_iter().for_each(|t| {
            let (start, end) = tile_range(t, tile_cols, ncols);
            for j in start..end {
                let s = a.indptr[j].index();
                let e = a.indptr[j + 1].index();
                for p in s..e {
                    let i = a.indices[p].index();
                    assert!(i < nrows, "row index {i} out of bounds for {nrows} rows");
                    // SAFETY: i < nrows and j < ncols, and cell (i, j) is only reachable from column j
                    unsafe {
                        let pd = pd_addr as *mut T;
                        std::ptr::write(pd.add(i * ncols + j), a.data[p]);
                    }
                }
            }
        });
    } else {
        for (c, r, &v) in a.entries() {
            out.data[r * ncols + c] = v;
        }
    }

    out.names = opts.labels.apply(&a.names);
    Ok(out)
}

/// Expand `a` directly into the `ncols × nrows` dense form of its transpose.
///
/// Cell-for-cell equal to densifying [`crate::transpose`]'s output.
///
/// # Errors
/// Same as [`to_dense_with`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(nrows = a.nrows, ncols = a.ncols, nnz = a.nnz())
)]
pub fn to_dense_transposed_with<T, I>(a: &Csc<T, I>, opts: &KernelOptions) -> Result<Dense<T>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    precheck(a, opts)?;
    let mut out = Dense::zeros(a.ncols, a.nrows)?;
    let nrows = a.nrows;

    // each output row is one source column, so rows can be filled independently
    if opts.tiles(a.nnz(), a.ncols) > 1 && !out.data.is_empty() {
        tracing::debug!("parallel transposed densify");
        out.data
            .par_chunks_mut(nrows)
            .enumerate()
            .for_each(|(j, row)| {
                let s = a.indptr[j].index();
                let e = a.indptr[j + 1].index();
                for (&i, &v) in a.indices[s..e].iter().zip(&a.data[s..e]) {
                    row[i.index()] = v;
                }
            });
    } else {
        for (c, r, &v) in a.entries() {
            out.data[c * nrows + r] = v;
        }
    }

    out.names = opts.labels.apply_transposed(&a.names);
    Ok(out)
}
