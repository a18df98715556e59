//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : non-finite function evaluation
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ invalid input tolerances and max_iter
//!     ├ invalid or non-finite computed tolerances
//!     └ mismatched tolerance type vs. algorithm ([`Algorithm`])
//!
//! Method-specific failures (no sign change, vanishing derivative, ...) live
//! next to each method and wrap these two via `#[from]`.


use thiserror::Error;
use super::algorithms::Algorithm;
use crate::primitives::errors::ToleranceError as BaseToleranceError;


/// Root-finding runtime errors.
///
/// `max_iter < 1` is rejected by the shared [`Tolerance`](crate::Tolerance)
/// and surfaces as [`ToleranceError::Base`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}


/// Tolerance configuration and evaluation errors.
///
/// ┌ Invalid input tolerances (`abs_fx`, `abs_x`, `rel_x`)
/// ├ Computed tolerance invalid (< 0 or non-finite)
/// └ Mismatched tolerance type vs. algorithm
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error(transparent)]
    Base(#[from] BaseToleranceError),

    #[error("width tolerance not applicable for algorithm {algorithm}")]
    WidthTolNotApplicable { algorithm: Algorithm },

    #[error("step tolerance not applicable for algorithm {algorithm}")]
    StepTolNotApplicable { algorithm: Algorithm },

    #[error("invalid computed tolerance: must be finite and >= 0. got {got}")]
    InvalidTolerance { got: f64 },
}
