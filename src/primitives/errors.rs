//! Error types of the primitives layer.
//!
//! ┌ [`ToleranceError`] : invalid `{abs_tol, rel_tol, max_iter}` values
//! └ [`DimensionError`] : shape violations of vectors and matrices

use thiserror::Error;


/// Tolerance configuration errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("invalid `abs_tol`: must be finite and >= 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("invalid `rel_tol`: must be finite and >= 0. got {got}")]
    InvalidRelTol { got: f64 },

    #[error("either `abs_tol` or `rel_tol` must be > 0. got {abs_tol} and {rel_tol}")]
    InvalidAbsRel { abs_tol: f64, rel_tol: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Shape errors for [`crate::Vector`] and [`crate::Matrix`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("ragged rows: row {row} has {got} entries, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("data length {got} does not match shape {rows}x{cols}")]
    DataLength { rows: usize, cols: usize, got: usize },

    #[error("incompatible shapes: {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    IncompatibleShapes { lhs_rows: usize, lhs_cols: usize, rhs_rows: usize, rhs_cols: usize },

    #[error("empty matrix or vector")]
    Empty,
}
