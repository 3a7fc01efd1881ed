//! Kernel configuration

use crate::util::SMALL_NNZ_LIMIT;
use sparsecol_core::LabelPolicy;

pub const ENV_VALIDATE: &str = "SPARSECOL_VALIDATE";
pub const ENV_PARALLEL_THRESHOLD: &str = "SPARSECOL_PARALLEL_THRESHOLD";

/// Options shared by the transpose and densify kernels.
///
/// The defaults match the unchecked fast path: no validation, labels carried
/// along, parallel tiles from [`SMALL_NNZ_LIMIT`] stored entries upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelOptions {
    /// Run [`sparsecol_core::Csc::validate`] on the input first.
    pub validate: bool,
    /// Carry or drop row/column labels in the result.
    pub labels: LabelPolicy,
    /// Minimum nnz before the rayon tiled paths are used. `usize::MAX` disables them.
    pub parallel_threshold: usize,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            validate: false,
            labels: LabelPolicy::Propagate,
            parallel_threshold: SMALL_NNZ_LIMIT,
        }
    }
}

impl KernelOptions {
    /// Defaults overlaid with `SPARSECOL_VALIDATE` and `SPARSECOL_PARALLEL_THRESHOLD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the option
    /// variables. Malformed values are logged and skipped.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        if let Some(v) = lookup(ENV_VALIDATE) {
            match parse_flag(&v) {
                Some(b) => opts.validate = b,
                None => tracing::warn!(var = ENV_VALIDATE, value = %v, "ignoring malformed flag"),
            }
        }
        if let Some(v) = lookup(ENV_PARALLEL_THRESHOLD) {
            match v.trim().parse::<usize>() {
                Ok(n) => opts.parallel_threshold = n,
                Err(_) => {
                    tracing::warn!(var = ENV_PARALLEL_THRESHOLD, value = %v, "ignoring malformed threshold");
                }
            }
        }
        opts
    }

    #[inline]
    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_labels(mut self, labels: LabelPolicy) -> Self {
        self.labels = labels;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Never use the tiled paths.
    #[inline]
    #[must_use]
    pub const fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    /// Number of column tiles to split `ncols` columns into; 1 means serial.
    pub(crate) fn tiles(&self, nnz: usize, ncols: usize) -> usize {
        if nnz < self.parallel_threshold {
            return 1;
        }
        rayon::current_num_threads().max(1).min(ncols.max(1))
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
