//! Core data structures for sparsecol (pure Rust)
//!
//! - [`Csc`]: compressed sparse column matrix, generic over value and index type
//! - [`Dense`]: row-major dense buffer produced by the densify kernels
//! - [`DimNames`]: optional row/column labels carried next to the structure
//! - [`SpIndex`]: the integer width used for `indptr`/`indices` (`i32` or `i64`)

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod alloc;
pub mod csc;
pub mod dense;
pub mod error;
pub mod index;
pub mod labels;

pub use csc::{Csc, Csc32, Csc64, Entries};
pub use dense::Dense;
pub use error::{Result, SparseError};
pub use index::SpIndex;
pub use labels::{DimNames, LabelPolicy};
