//! Error type shared by constructors and kernels

use thiserror::Error;

/// Which matrix axis a label sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rows => f.write_str("row"),
            Self::Cols => f.write_str("column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    #[error("indptr length must be ncols + 1: got {len}, expected {expected}")]
    IndptrLength { len: usize, expected: usize },

    #[error("indptr first element must be 0, got {first}")]
    IndptrStart { first: i64 },

    #[error("indptr last element must equal nnz: got {last}, nnz is {nnz}")]
    IndptrEnd { last: i64, nnz: usize },

    #[error("indices and data must have equal length: {indices} indices vs {data} values")]
    LengthMismatch { indices: usize, data: usize },

    #[error("indptr must be non-decreasing: column {col} starts at {start} but ends at {end}")]
    IndptrDecreasing { col: usize, start: i64, end: i64 },

    #[error("indptr entry {value} for column {col} exceeds nnz {nnz}")]
    IndptrOutOfRange { col: usize, value: i64, nnz: usize },

    #[error("negative index {value} at position {position}")]
    NegativeIndex { value: i64, position: usize },

    #[error("row index out of bounds in column {col}: {row} >= {nrows}")]
    RowOutOfBounds { col: usize, row: usize, nrows: usize },

    #[error("row indices must be strictly increasing within each column (column {col}, position {position})")]
    UnsortedRows { col: usize, position: usize },

    #[error("{axis} labels have length {len}, expected {expected}")]
    LabelLength { axis: Axis, len: usize, expected: usize },

    #[error("{value} does not fit the {width}-bit index type")]
    IndexOverflow { value: usize, width: u32 },

    #[error("dense shape {nrows}x{ncols} overflows usize")]
    ShapeOverflow { nrows: usize, ncols: usize },

    #[error("failed to allocate {elements} elements")]
    Allocation { elements: usize },
}

pub type Result<T> = std::result::Result<T, SparseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SparseError::RowOutOfBounds {
            col: 1,
            row: 7,
            nrows: 3,
        };
        assert_eq!(err.to_string(), "row index out of bounds in column 1: 7 >= 3");

        let err = SparseError::LabelLength {
            axis: Axis::Cols,
            len: 2,
            expected: 4,
        };
        assert_eq!(err.to_string(), "column labels have length 2, expected 4");
    }
}
