use thiserror::Error;

use crate::differentiation::DifferentiationError;
use crate::linear_system::LinearSystemError;
use crate::primitives::{DimensionError, ToleranceError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptimizationError {
    #[error("not a descent direction: gᵀp = {slope} >= 0")]
    NonDescentDirection { slope: f64 },

    #[error("no sufficient decrease after {backtracks} backtracking steps")]
    LineSearchFailed { backtracks: usize },

    #[error("non-finite objective value {fx}")]
    NonFiniteObjective { fx: f64 },

    #[error("non-finite gradient")]
    NonFiniteGradient,

    #[error("empty starting point")]
    EmptyPoint,

    #[error("starting point must be finite")]
    NonFiniteStart,

    #[error("gradient has {got} components, expected {expected}")]
    GradientLength { expected: usize, got: usize },

    #[error("hessian must be {expected}x{expected}. got {rows}x{cols}")]
    HessianShape { expected: usize, rows: usize, cols: usize },

    #[error("invalid bracket [{a}, {b}]: need finite a < b")]
    InvalidBracket { a: f64, b: f64 },

    #[error("invalid {name} {got}")]
    InvalidParameter { name: &'static str, got: f64 },

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Differentiation(#[from] DifferentiationError),

    #[error(transparent)]
    LinearSystem(#[from] LinearSystemError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
