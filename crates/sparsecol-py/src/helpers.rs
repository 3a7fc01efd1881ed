//! Conversions between the kernels' Rust types and Python-facing values

use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;
use sparsecol_core::{Dense, DimNames, LabelPolicy, SparseError};
use sparsecol_kernels::KernelOptions;

/// Dense result handed back to Python: values plus optional row/column labels.
pub(crate) type DenseTuple<'py> = (
    Bound<'py, PyArray2<f64>>,
    Option<Vec<String>>,
    Option<Vec<String>>,
);

/// Map a kernel error onto the closest Python exception.
pub(crate) fn to_py_err(e: SparseError) -> PyErr {
    match e {
        SparseError::Allocation { .. } | SparseError::ShapeOverflow { .. } => {
            PyErr::new::<PyMemoryError, _>(e.to_string())
        }
        _ => PyErr::new::<PyValueError, _>(e.to_string()),
    }
}

/// Environment defaults, tightened by the per-call flags.
pub(crate) fn options(labels: bool, check: bool) -> KernelOptions {
    let base = KernelOptions::from_env();
    let policy = if labels {
        LabelPolicy::Propagate
    } else {
        LabelPolicy::Drop
    };
    base.with_validation(base.validate || check).with_labels(policy)
}

pub(crate) fn names(rows: Option<Vec<String>>, cols: Option<Vec<String>>) -> DimNames {
    DimNames::new(rows, cols)
}

/// Move a dense buffer into a 2D numpy array without copying the cells.
pub(crate) fn dense_to_py<'py>(py: Python<'py>, d: Dense<f64>) -> PyResult<DenseTuple<'py>> {
    let Dense {
        nrows,
        ncols,
        data,
        names,
    } = d;
    let arr = Array2::from_shape_vec((nrows, ncols), data)
        .map_err(|_| PyErr::new::<PyValueError, _>("Output shape mismatch"))?;
    Ok((arr.into_pyarray(py), names.rows, names.cols))
}
