//! Transpose and densify kernels for CSC matrices (pure Rust, rayon parallel)
//!
//! All kernels are generic over the value type and the index width
//! ([`sparsecol_core::SpIndex`]), borrow their input, and return a freshly
//! allocated result. Rayon sizes its pool from `RAYON_NUM_THREADS` by default.

pub mod densify;
pub mod options;
pub mod transpose;
pub mod util;

pub use densify::{to_dense, to_dense_transposed, to_dense_transposed_with, to_dense_with};
pub use options::KernelOptions;
pub use transpose::{transpose, transpose_with};
