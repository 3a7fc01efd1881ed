#![allow(
    clippy::type_complexity,
    reason = "pyo3 functions often return tuples of arrays, sizes and labels"
)]
#![allow(
    clippy::too_many_arguments,
    reason = "Python-exposed constructors/functions map directly to multiple array arguments"
)]
#![allow(
    clippy::needless_pass_by_value,
    reason = "PyReadonlyArray types are thin wrappers passed by value in pyo3 idioms"
)]
#![allow(
    clippy::missing_const_for_fn,
    reason = "pyo3 #[pymethods] are not const-compatible"
)]
#![allow(
    clippy::elidable_lifetime_names,
    reason = "Explicit 'py lifetimes are idiomatic and clear in PyO3 method signatures"
)]
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use sparsecol_core::Csc64 as Csc64Matrix;
use sparsecol_kernels::{to_dense_transposed_with, to_dense_with, transpose_with};

mod helpers;
mod logging;
mod types;

use helpers::{dense_to_py, names, options, to_py_err, DenseTuple};
use types::{Csc32, Csc64};

/// `(indptr, indices, data, nrows, ncols, row_names, col_names)`
type TransposedParts<'py> = (
    Bound<'py, PyArray1<i64>>,
    Bound<'py, PyArray1<i64>>,
    Bound<'py, PyArray1<f64>>,
    usize,
    usize,
    Option<Vec<String>>,
    Option<Vec<String>>,
);

fn build(
    nrows: usize,
    ncols: usize,
    indptr: &PyReadonlyArray1<'_, i64>,
    indices: &PyReadonlyArray1<'_, i64>,
    data: &PyReadonlyArray1<'_, f64>,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
    check: bool,
) -> PyResult<Csc64Matrix<f64>> {
    Csc64Matrix::from_parts(
        nrows,
        ncols,
        indptr.as_slice()?.to_vec(),
        indices.as_slice()?.to_vec(),
        data.as_slice()?.to_vec(),
        check,
    )
    .and_then(|m| m.with_names(names(row_names, col_names)))
    .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (nrows, ncols, indptr, indices, data, row_names=None, col_names=None, check=false, labels=true))]
fn transpose_from_parts<'py>(
    py: Python<'py>,
    nrows: usize,
    ncols: usize,
    indptr: PyReadonlyArray1<'py, i64>,
    indices: PyReadonlyArray1<'py, i64>,
    data: PyReadonlyArray1<'py, f64>,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
    check: bool,
    labels: bool,
) -> PyResult<TransposedParts<'py>> {
    let a = build(
        nrows, ncols, &indptr, &indices, &data, row_names, col_names, check,
    )?;
    let opts = options(labels, check);
    let t = py.detach(|| transpose_with(&a, &opts)).map_err(to_py_err)?;
    Ok((
        PyArray1::from_vec(py, t.indptr),
        PyArray1::from_vec(py, t.indices),
        PyArray1::from_vec(py, t.data),
        t.nrows,
        t.ncols,
        t.names.rows,
        t.names.cols,
    ))
}

#[pyfunction]
#[pyo3(signature = (nrows, ncols, indptr, indices, data, row_names=None, col_names=None, check=false, labels=true))]
fn to_dense_from_parts<'py>(
    py: Python<'py>,
    nrows: usize,
    ncols: usize,
    indptr: PyReadonlyArray1<'py, i64>,
    indices: PyReadonlyArray1<'py, i64>,
    data: PyReadonlyArray1<'py, f64>,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
    check: bool,
    labels: bool,
) -> PyResult<DenseTuple<'py>> {
    let a = build(
        nrows, ncols, &indptr, &indices, &data, row_names, col_names, check,
    )?;
    let opts = options(labels, check);
    let d = py.detach(|| to_dense_with(&a, &opts)).map_err(to_py_err)?;
    dense_to_py(py, d)
}

#[pyfunction]
#[pyo3(signature = (nrows, ncols, indptr, indices, data, row_names=None, col_names=None, check=false, labels=true))]
fn to_dense_transposed_from_parts<'py>(
    py: Python<'py>,
    nrows: usize,
    ncols: usize,
    indptr: PyReadonlyArray1<'py, i64>,
    indices: PyReadonlyArray1<'py, i64>,
    data: PyReadonlyArray1<'py, f64>,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
    check: bool,
    labels: bool,
) -> PyResult<DenseTuple<'py>> {
    let a = build(
        nrows, ncols, &indptr, &indices, &data, row_names, col_names, check,
    )?;
    let opts = options(labels, check);
    let d = py
        .detach(|| to_dense_transposed_with(&a, &opts))
        .map_err(to_py_err)?;
    dense_to_py(py, d)
}

#[pymodule]
fn _core(m: &Bound<PyModule>) -> PyResult<()> {
    m.add("version", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<Csc32>()?;
    m.add_class::<Csc64>()?;
    m.add_function(wrap_pyfunction!(transpose_from_parts, m)?)?;
    m.add_function(wrap_pyfunction!(to_dense_from_parts, m)?)?;
    m.add_function(wrap_pyfunction!(to_dense_transposed_from_parts, m)?)?;
    m.add_function(wrap_pyfunction!(logging::init_logging, m)?)?;
    Ok(())
}
