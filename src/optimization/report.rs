//! Reports returned by the minimizers.

use crate::primitives::Vector;


/// Reasons a minimizer may terminate.
///
/// - [`TerminationReason::GradientTolReached`] : `||∇f(x)||_2 <= grad_tol`
/// - [`TerminationReason::StepTolReached`]     : `||Δx|| <= abs_x + rel_x ||x||`
/// - [`TerminationReason::BracketTolReached`]  : golden-section bracket below `x_tol`
/// - [`TerminationReason::IterationLimit`]     : budget exhausted, last iterate kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    GradientTolReached,
    StepTolReached,
    BracketTolReached,
    IterationLimit,
}


/// Final report of [`gradient_descent`](crate::optimization::gradient_descent())
/// and [`newton`](crate::optimization::newton()).
///
/// [`OptimizationReport`]
/// - `x`                  : best point found
/// - `f_x`                : objective at `x`
/// - `gradient_norm`      : `||∇f(x)||_2`
/// - `estimated_error`    : last accepted step `||Δx||_2`, `0` without steps
/// - `iterations`         : accepted steps
/// - `evaluations`        : objective evaluations (line search and Hessian probes included)
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `algorithm_name`     : e.g. `"newton"`
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    pub x                  : Vector,
    pub f_x                : f64,
    pub gradient_norm      : f64,
    pub estimated_error    : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
}

impl OptimizationReport {
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination_reason != TerminationReason::IterationLimit
    }

    pub(crate) fn log(&self) {
        if self.converged() {
            tracing::debug!(
                algorithm     = self.algorithm_name,
                f_x           = self.f_x,
                gradient_norm = self.gradient_norm,
                estimated_err = self.estimated_error,
                iterations    = self.iterations,
                evaluations   = self.evaluations,
                "minimization converged"
            );
        } else {
            tracing::warn!(
                algorithm     = self.algorithm_name,
                f_x           = self.f_x,
                gradient_norm = self.gradient_norm,
                estimated_err = self.estimated_error,
                iterations    = self.iterations,
                "minimization stopped at iteration limit"
            );
        }
    }
}


/// Final report of [`golden_section`](crate::optimization::golden_section()).
///
/// `bracket` is the last `[a, b]`, which still contains `x`;
/// `estimated_error` is its half-width `(b - a) / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSectionReport {
    pub x                  : f64,
    pub f_x                : f64,
    pub bracket            : [f64; 2],
    pub estimated_error    : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
}

impl GoldenSectionReport {
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination_reason != TerminationReason::IterationLimit
    }
}
