//! Reports returned by the differentiation routines.

use crate::primitives::{Matrix, Vector};


/// Scalar derivative estimate.
///
/// [`DerivativeReport`]
/// - `value`           : derivative estimate
/// - `estimated_error` : truncation estimate from `h` vs `2h` plus round-off
/// - `step`            : realised step `(x + h) - x`
/// - `evaluations`     : function evaluations spent
/// - `algorithm_name`  : scheme name (e.g. `"central difference"`)
#[derive(Debug, Copy, Clone)]
pub struct DerivativeReport {
    pub value:           f64,
    pub estimated_error: f64,
    pub step:            f64,
    pub evaluations:     usize,
    pub algorithm_name:  &'static str,
}


/// Gradient estimate; `estimated_error` is per component.
#[derive(Debug, Clone)]
pub struct GradientReport {
    pub gradient:        Vector,
    pub estimated_error: Vector,
    pub evaluations:     usize,
    pub algorithm_name:  &'static str,
}


/// Symmetric Hessian estimate.
#[derive(Debug, Clone)]
pub struct HessianReport {
    pub hessian:        Matrix,
    pub steps:          Vector,
    pub evaluations:    usize,
    pub algorithm_name: &'static str,
}
