use thiserror::Error;

use crate::linear_system::LinearSystemError;
use crate::primitives::DimensionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeastSquaresError {
    #[error("empty design matrix")]
    Empty,

    #[error("underdetermined fit: {rows} observations for {cols} coefficients")]
    TooFewObservations { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected} observations, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("non-finite entry at ({row}, {col})")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("rank deficient design matrix: |r| = {pivot} in column {column}")]
    RankDeficient { column: usize, pivot: f64 },

    #[error("invalid rank_tol {got}: must be finite and in [0, 1)")]
    InvalidRankTol { got: f64 },

    #[error(transparent)]
    LinearSystem(#[from] LinearSystemError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
