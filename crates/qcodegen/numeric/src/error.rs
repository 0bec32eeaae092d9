//! Error types for the numeric kernel.

use thiserror::Error;

/// Errors that can occur in kernel operations.
///
/// These indicate defects in catalog data (mis-shaped reference operators),
/// never user input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Operation that was attempted.
        op: &'static str,
        /// Left operand rows.
        lhs_rows: usize,
        /// Left operand columns.
        lhs_cols: usize,
        /// Right operand rows.
        rhs_rows: usize,
        /// Right operand columns.
        rhs_cols: usize,
    },

    /// Row-major construction received rows of unequal length.
    #[error("ragged rows: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Convenience result type for kernel operations.
pub type NumericResult<T> = Result<T, NumericError>;
