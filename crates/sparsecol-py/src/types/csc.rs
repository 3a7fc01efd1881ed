//! `Csc32` / `Csc64` pyclasses

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use sparsecol_core::Csc;
use sparsecol_kernels::{to_dense_transposed_with, to_dense_with, transpose_with};

use crate::helpers::{dense_to_py, names, options, to_py_err, DenseTuple};

/// `(indptr, indices, data, nrows, ncols)`
pub(crate) type PartsTuple<'py, I> = (
    Bound<'py, PyArray1<I>>,
    Bound<'py, PyArray1<I>>,
    Bound<'py, PyArray1<f64>>,
    usize,
    usize,
);

macro_rules! csc_pyclass {
    ($name:ident, $idx:ty) => {
        #[pyclass(module = "sparsecol._core")]
        pub struct $name {
            pub(crate) inner: Csc<f64, $idx>,
        }

        #[pymethods]
        impl $name {
            #[new]
            #[pyo3(signature = (nrows, ncols, indptr, indices, data, row_names=None, col_names=None, check=false))]
            fn new(
                nrows: usize,
                ncols: usize,
                indptr: PyReadonlyArray1<'_, $idx>,
                indices: PyReadonlyArray1<'_, $idx>,
                data: PyReadonlyArray1<'_, f64>,
                row_names: Option<Vec<String>>,
                col_names: Option<Vec<String>>,
                check: bool,
            ) -> PyResult<Self> {
                let inner = Csc::from_parts(
                    nrows,
                    ncols,
                    indptr.as_slice()?.to_vec(),
                    indices.as_slice()?.to_vec(),
                    data.as_slice()?.to_vec(),
                    check,
                )
                .and_then(|m| m.with_names(names(row_names, col_names)))
                .map_err(to_py_err)?;
                Ok(Self { inner })
            }

            fn shape(&self) -> (usize, usize) {
                self.inner.shape()
            }

            fn nnz(&self) -> usize {
                self.inner.nnz()
            }

            fn row_names(&self) -> Option<Vec<String>> {
                self.inner.names.rows.clone()
            }

            fn col_names(&self) -> Option<Vec<String>> {
                self.inner.names.cols.clone()
            }

            /// Run the full canonical-form check; raises `ValueError` on violation.
            fn validate(&self, py: Python<'_>) -> PyResult<()> {
                py.detach(|| self.inner.validate()).map_err(to_py_err)
            }

            fn parts<'py>(&self, py: Python<'py>) -> PartsTuple<'py, $idx> {
                (
                    PyArray1::from_slice(py, &self.inner.indptr),
                    PyArray1::from_slice(py, &self.inner.indices),
                    PyArray1::from_slice(py, &self.inner.data),
                    self.inner.nrows,
                    self.inner.ncols,
                )
            }

            #[pyo3(signature = (labels=true, check=false))]
            fn transpose(&self, py: Python<'_>, labels: bool, check: bool) -> PyResult<Self> {
                let opts = options(labels, check);
                let inner = py
                    .detach(|| transpose_with(&self.inner, &opts))
                    .map_err(to_py_err)?;
                Ok(Self { inner })
            }

            #[pyo3(signature = (labels=true, check=false))]
            fn to_dense<'py>(
                &self,
                py: Python<'py>,
                labels: bool,
                check: bool,
            ) -> PyResult<DenseTuple<'py>> {
                let opts = options(labels, check);
                let d = py
                    .detach(|| to_dense_with(&self.inner, &opts))
                    .map_err(to_py_err)?;
                dense_to_py(py, d)
            }

            #[pyo3(signature = (labels=true, check=false))]
            fn to_dense_transposed<'py>(
                &self,
                py: Python<'py>,
                labels: bool,
                check: bool,
            ) -> PyResult<DenseTuple<'py>> {
                let opts = options(labels, check);
                let d = py
                    .detach(|| to_dense_transposed_with(&self.inner, &opts))
                    .map_err(to_py_err)?;
                dense_to_py(py, d)
            }

            fn __repr__(&self) -> String {
                format!(
                    "{}(shape=({}, {}), nnz={})",
                    stringify!($name),
                    self.inner.nrows,
                    self.inner.ncols,
                    self.inner.nnz()
                )
            }
        }
    };
}

csc_pyclass!(Csc32, i32);
csc_pyclass!(Csc64, i64);
