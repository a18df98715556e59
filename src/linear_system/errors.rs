use thiserror::Error;

use crate::primitives::DimensionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinearSystemError {
    #[error("matrix must be square. got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("empty system")]
    Empty,

    #[error("non-finite entry at ({row}, {col})")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("matrix is singular to working precision: pivot {pivot} in column {column}")]
    Singular { column: usize, pivot: f64 },

    #[error("invalid pivot_tol {got}: must be finite and >= 0")]
    InvalidPivotTol { got: f64 },

    #[error("invalid refinement tolerance {got}: must be finite and >= 0")]
    InvalidTolerance { got: f64 },

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
