//! Row and column labels
//!
//! Labels are opaque metadata. Kernels never look at them; they only copy,
//! swap or drop them according to a [`LabelPolicy`].

use crate::error::{Axis, Result, SparseError};

/// Optional labels for both axes. `None` means the axis is unlabelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimNames {
    pub rows: Option<Vec<String>>,
    pub cols: Option<Vec<String>>,
}

impl DimNames {
    #[inline]
    #[must_use]
    pub const fn new(rows: Option<Vec<String>>, cols: Option<Vec<String>>) -> Self {
        Self { rows, cols }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_none() && self.cols.is_none()
    }

    /// Deep copy with the axes exchanged.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols.clone(),
            cols: self.rows.clone(),
        }
    }

    /// Check label lengths against a matrix shape.
    pub fn check_shape(&self, nrows: usize, ncols: usize) -> Result<()> {
        check_axis(self.rows.as_deref(), Axis::Rows, nrows)?;
        check_axis(self.cols.as_deref(), Axis::Cols, ncols)
    }
}

fn check_axis(labels: Option<&[String]>, axis: Axis, expected: usize) -> Result<()> {
    match labels {
        Some(l) if l.len() != expected => Err(SparseError::LabelLength {
            axis,
            len: l.len(),
            expected,
        }),
        _ => Ok(()),
    }
}

/// Whether a kernel carries labels into its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Copy labels (swapped for transposing kernels).
    #[default]
    Propagate,
    /// Leave the result unlabelled; the caller attaches labels itself.
    Drop,
}

impl LabelPolicy {
    /// Labels for a result with the same orientation as the input.
    #[must_use]
    pub fn apply(self, names: &DimNames) -> DimNames {
        match self {
            Self::Propagate => names.clone(),
            Self::Drop => DimNames::default(),
        }
    }

    /// Labels for a transposed result.
    #[must_use]
    pub fn apply_transposed(self, names: &DimNames) -> DimNames {
        match self {
            Self::Propagate => names.transposed(),
            Self::Drop => DimNames::default(),
        }
    }
}
