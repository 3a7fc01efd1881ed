//! CSC -> CSC transpose by counting sort.
//!
//! Implements:
//! - **Serial path**: count rows, exclusive prefix sum, scatter in storage order
//!   using the output `indptr` itself as the per-column write cursor, then shift
//!   the cursors back into start offsets.
//! - **Tiled path** (large inputs): per-tile histograms over contiguous column
//!   ranges, a sequential prefix sum producing the global `indptr` and per-tile
//!   start offsets, then a lock-free parallel scatter with private cursors.
//!
//! Both paths place entries in increasing source-column order within every
//! output column, so the result is canonical without any comparison sort.

use crate::options::KernelOptions;
use crate::util::{precheck, tile_range, HISTOGRAM_MEM_CAP};
use rayon::prelude::*;
use sparsecol_core::alloc::try_filled;
use sparsecol_core::{Csc, Result, SpIndex, SparseError};

/// Transpose with default [`KernelOptions`].
pub fn transpose<T, I>(a: &Csc<T, I>) -> Result<Csc<T, I>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    transpose_with(a, &KernelOptions::default())
}

/// Transposes a CSC matrix: A (nrows × ncols) → A^T (ncols × nrows) in CSC format.
///
/// Labels are swapped and deep-copied unless `opts.labels` drops them. The
/// input must be canonical; with `opts.validate` unset this is not checked and
/// a violating input yields an unspecified (but memory-safe) result.
///
/// # Errors
/// - [`SparseError::IndexOverflow`] when `ncols` does not fit the index type
/// - [`SparseError::Allocation`] when an output buffer cannot be allocated
/// - any validation error when `opts.validate` is set
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(nrows = a.nrows, ncols = a.ncols, nnz = a.nnz())
)]
pub fn transpose_with<T, I>(a: &Csc<T, I>, opts: &KernelOptions) -> Result<Csc<T, I>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    precheck(a, opts)?;
    check_row_width::<I>(a.ncols)?;

    let tiles = opts.tiles(a.nnz(), a.ncols);
    let elem_size = std::mem::size_of::<usize>() as u128;
    let mem_est = (tiles as u128) * (a.nrows as u128) * elem_size;
    let mut out = if tiles > 1 && mem_est <= HISTOGRAM_MEM_CAP {
        tracing::debug!(tiles, "tiled transpose");
        match transpose_tiled(a, tiles)? {
            Some(t) => t,
            None => transpose_serial(a)?,
        }
    } else {
        tracing::debug!("serial transpose");
        transpose_serial(a)?
    };
    out.names = opts.labels.apply_transposed(&a.names);
    Ok(out)
}

/// Source column ids become output row indices, so the largest one
/// (`ncols - 1`) must fit the index type.
fn check_row_width<I: SpIndex>(ncols: usize) -> Result<()> {
    I::checked_from_usize(ncols.saturating_sub(1)).map(|_| ())
}

fn output_indptr_len(nrows: usize) -> Result<usize> {
    nrows.checked_add(1).ok_or(SparseError::IndexOverflow {
        value: nrows,
        width: usize::BITS,
    })
}

#[allow(
    clippy::needless_range_loop,
    reason = "Index-based loops keep the offset bookkeeping explicit"
)]
fn transpose_serial<T, I>(a: &Csc<T, I>) -> Result<Csc<T, I>>
where
    T: Copy + Default,
    I: SpIndex,
{
    let nrows = a.nrows;
    let nnz = a.nnz();

    // 1) count entries per output column (input row) into indptr[r + 1]
    let mut indptr = try_filled(output_indptr_len(nrows)?, I::ZERO)?;
    for &r in &a.indices[..nnz] {
        indptr[r.index() + 1] += I::ONE;
    }

    // 2) exclusive prefix sum: indptr[r] is the start of output column r
    for r in 0..nrows {
        let prev = indptr[r];
        indptr[r + 1] += prev;
    }

    // 3) scatter in storage order; indptr[r] doubles as the write cursor
    let mut indices = try_filled(nnz, I::ZERO)?;
    let mut data = try_filled(nnz, T::default())?;
    for (c, r, &v) in a.entries() {
        let pos = indptr[r].index();
        indices[pos] = I::from_usize(c);
        data[pos] = v;
        indptr[r] += I::ONE;
    }

    // 4) cursors now hold end offsets; shift right by one to restore starts
    indptr.copy_within(0..nrows, 1);
    indptr[0] = I::ZERO;

    Ok(Csc::from_parts_unchecked(
        a.ncols, a.nrows, indptr, indices, data,
    ))
}

/// Returns `None` when the input's column pointers do not add up to `nnz`,
/// leaving the caller to fall back to the serial path.
#[allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use short names like i/j/t/s/e/p"
)]
#[allow(
    clippy::needless_range_loop,
    reason = "Index-based loops keep CSC math clear and efficient"
)]
fn transpose_tiled<T, I>(a: &Csc<T, I>, tiles: usize) -> Result<Option<Csc<T, I>>>
where
    T: Copy + Default + Send + Sync,
    I: SpIndex,
{
    let ncols_t = a.nrows; // cols of transposed (A^T)
    let nnz = a.nnz();
    let tile_cols = a.ncols.div_ceil(tiles);

    // 1) per-tile counts per target column (original row i)
    let counts: Vec<Vec<usize>> = (0..tiles)
        .into_par_iter()
        .map(|t| -> Result<Vec<usize>> {
            let (start, end) = tile_range(t, tile_cols, a.ncols);
            let mut c = try_filled(ncols_t, 0usize)?;
            for j in start..end {
                let s = a.indptr[j].index();
                let e = a.indptr[j + 1].index();
                for &i in &a.indices[s..e] {
                    c[i.index()] += 1;
                }
            }
            Ok(c)
        })
        .collect::<Result<_>>()?;

    // 2) global indptr, turning each tile's counts into its start offsets in place
    let mut indptr = try_filled(output_indptr_len(ncols_t)?, I::ZERO)?;
    let mut offsets = counts;
    let mut running = 0usize;
    for i in 0..ncols_t {
        indptr[i] = I::from_usize(running);
        for t in 0..tiles {
            let n = offsets[t][i];
            offsets[t][i] = running;
            running += n;
        }
    }
    if running != nnz {
        tracing::debug!(running, nnz, "column pointers disagree with nnz");
        return Ok(None);
    }
    indptr[ncols_t] = I::from_usize(running);

    // 3) fill in parallel; tile offsets partition [0, nnz) so writes never overlap
    let mut indices = try_filled(nnz, I::ZERO)?;
    let mut data = try_filled(nnz, T::default())?;
    let pi_addr = indices.as_mut_ptr() as usize;
    let pv_addr = data.as_mut_ptr() as usize;

    offsets
        .into_par_iter()
        .enumerate()
        .for_each(|(t, mut pos)| {
            let (start, end) = tile_range(t, tile_cols, a.ncols);
            for j in start..end {
                let s = a.indptr[j].index();
                let e = a.indptr[j + 1].index();
                let col = I::from_usize(j);
                for p in s..e {
                    let i = a.indices[p].index();
                    let dst = pos[i];
                    pos[i] = dst + 1;
                    // SAFETY: dst < nnz, and each slot belongs to exactly one (tile, column) pair
                    unsafe {
                        let pi = pi_addr as *mut I;
                        let pv = pv_addr as *mut T;
                        std::ptr::write(pi.add(dst), col);
                        std::ptr::write(pv.add(dst), a.data[p]);
                    }
                }
            }
        });

    Ok(Some(Csc::from_parts_unchecked(
        a.ncols, a.nrows, indptr, indices, data,
    )))
}
