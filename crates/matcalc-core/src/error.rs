//! Error types for matrix construction and arithmetic.

use thiserror::Error;

/// Result type alias using [`MatrixError`].
pub type Result<T> = std::result::Result<T, MatrixError>;

/// A `(rows, cols)` pair.
pub type Shape = (usize, usize);

/// Failures raised by the kernel. Every failure is deterministic: the same
/// input fails the same way on every call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column, and its cell count
    /// must fit in an allocation.
    #[error("invalid shape ({rows}, {cols}): dimensions must be positive and the cell count addressable")]
    InvalidShape { rows: usize, cols: usize },

    /// A flat buffer does not hold exactly `rows * cols` cells.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    BufferLength { rows: usize, cols: usize, len: usize },

    /// Nested rows passed to a constructor do not all have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row or column index past the end of the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operation requires a square matrix.
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Determinant is exactly zero.
    #[error("matrix is singular (determinant is 0)")]
    Singular,

    /// Operand shapes are incompatible for a binary operation.
    #[error("shape mismatch in {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// Dimensions fall outside the `1..=max` range accepted by an editor.
    #[error("matrix dimensions {rows}x{cols} outside 1..={max}")]
    DimensionLimit { rows: usize, cols: usize, max: usize },
}
