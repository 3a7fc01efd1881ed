//! Shared constants and helpers for the kernels

use crate::options::KernelOptions;
use sparsecol_core::{Csc, Result, SpIndex};

/// Threshold (nnz) for switching from the serial to the tiled kernels
pub const SMALL_NNZ_LIMIT: usize = 32 * 1024;
/// Cap on the per-tile histogram memory of the tiled transpose (~512MB)
pub const HISTOGRAM_MEM_CAP: u128 = 512 * 1024 * 1024;

/// Column range `[start, end)` covered by tile `t`.
#[inline]
pub(crate) fn tile_range(t: usize, tile_cols: usize, ncols: usize) -> (usize, usize) {
    let start = (t * tile_cols).min(ncols);
    let end = (start + tile_cols).min(ncols);
    (start, end)
}

/// Run the optional canonical-form check requested by `opts`.
pub(crate) fn precheck<T, I: SpIndex>(a: &Csc<T, I>, opts: &KernelOptions) -> Result<()> {
    if opts.validate {
        if let Err(e) = a.validate() {
            tracing::debug!(error = %e, "input rejected");
            return Err(e);
        }
    }
    Ok(())
}
