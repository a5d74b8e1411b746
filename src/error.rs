//! Error types for graphalgebra.

use thiserror::Error;

/// Result type alias using graphalgebra's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in graphalgebra operations.
///
/// Every variant describes a caller mistake (shape or index misuse); none of
/// them is produced by well-formed input data. Numeric edge cases such as
/// division by zero follow IEEE-754 semantics and are not reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand dimensions disagree with what the operation requires.
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        /// Expected (rows, columns)
        expected: (usize, usize),
        /// Actual (rows, columns)
        found: (usize, usize),
    },

    /// The contraction dimensions of a multiply disagree.
    #[error("inner dimension mismatch: left has {left_columns} columns, right has {right_rows} rows")]
    InnerDimensionMismatch {
        /// Columns of the left operand
        left_columns: usize,
        /// Rows of the right operand
        right_rows: usize,
    },

    /// A row, column or vector index is outside the container bounds.
    #[error("index {index} out of bounds for dimension of size {bound}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Size of the dimension indexed into
        bound: usize,
    },

    /// A mask's shape disagrees with the output container it guards.
    #[error("mask dimensions {mask:?} do not match output dimensions {output:?}")]
    MaskDimensionMismatch {
        /// Mask (rows, columns)
        mask: (usize, usize),
        /// Output (rows, columns)
        output: (usize, usize),
    },

    /// Strassen block splitting reached a matrix with an odd dimension.
    #[error("strassen split requires an even dimension, got {size}")]
    OddStrassenDimension {
        /// The dimension that could not be halved
        size: usize,
    },

    /// Rows of differing lengths were supplied to a `from_rows` constructor.
    #[error("ragged input: row {row} has length {found}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of that row
        found: usize,
        /// Length of the first row
        expected: usize,
    },
}

impl Error {
    /// Bounds-check helper: `Ok(())` when `index < bound`.
    pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, bound })
        }
    }
}
