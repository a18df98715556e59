use thiserror::Error;

use crate::primitives::DimensionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DifferentiationError {
    #[error("evaluation point must be finite. got {got}")]
    NonFiniteX { got: f64 },

    #[error("invalid step {got}: must be finite and > 0")]
    InvalidStep { got: f64 },

    #[error("step {step} vanishes at x = {x}")]
    StepUnderflow { x: f64, step: f64 },

    #[error("non-finite function value at x = {x}: f(x) = {fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("non-finite objective value {fx}")]
    NonFiniteObjective { fx: f64 },

    #[error("empty evaluation point")]
    EmptyPoint,

    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
