//! Subscriber setup for the kernels' `tracing` events
//!
//! The kernels only emit events; the embedding process decides where they go.
//! `RUST_LOG` is honoured when no explicit filter is passed.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber. Returns `False` if one was already installed.
#[pyfunction]
#[pyo3(signature = (filter=None, compact=false))]
pub(crate) fn init_logging(filter: Option<&str>, compact: bool) -> PyResult<bool> {
    let env_filter = match filter {
        Some(f) => EnvFilter::try_new(f)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("invalid log filter: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);
    let installed = if compact {
        builder.compact().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    Ok(installed)
}
