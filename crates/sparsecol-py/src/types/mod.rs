//! Python-visible matrix classes
//!
//! Each class is a thin wrapper over a `sparsecol_core::Csc` with `f64` values;
//! kernels are delegated to `sparsecol_kernels` with the GIL released.

pub mod csc;

pub use csc::{Csc32, Csc64};
