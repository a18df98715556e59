//! Backtracking line search.
//!
//! Starting from `α = initial_step`, shrink `α` until the Armijo
//! condition holds:
//!
//! ```text
//! f(x + α p) <= f(x) + c1 α gᵀp
//! ```
//!
//! A trial point with a non-finite objective counts as a failed trial.

use crate::optimization::config::LineSearchCfg;
use crate::optimization::errors::OptimizationError;
use crate::primitives::Vector;


/// Accepted step of [`backtracking`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchReport {
    pub alpha:       f64,
    pub x:           Vector,
    pub f_x:         f64,
    pub evaluations: usize,
}


/// Searches along `p` from `x`, where `fx = f(x)` and `g = ∇f(x)`.
///
/// # Errors
/// - [`OptimizationError::Dimension`]           : `g` or `p` length differs from `x`
/// - [`OptimizationError::NonDescentDirection`] : `gᵀp >= 0` (or NaN)
/// - [`OptimizationError::LineSearchFailed`]    : `max_backtracks` trials without decrease
pub fn backtracking<F: Fn(&Vector) -> f64>(
    f: F,
    x: &Vector,
    fx: f64,
    g: &Vector,
    p: &Vector,
    cfg: LineSearchCfg,
) -> Result<LineSearchReport, OptimizationError> {
    x.check_len(g)?;
    let slope = g.dot(p)?;
    if !(slope < 0.0) {
        return Err(OptimizationError::NonDescentDirection { slope });
    }

    let mut alpha = cfg.initial_step();
    for k in 0..cfg.max_backtracks() {
        let mut trial = x.clone();
        trial.axpy(alpha, p)?;
        let ft = f(&trial);

        if ft.is_finite() && ft <= fx + cfg.c1() * alpha * slope {
            return Ok(LineSearchReport { alpha, x: trial, f_x: ft, evaluations: k + 1 });
        }
        tracing::trace!(alpha, f_trial = ft, "armijo condition not met");
        alpha *= cfg.shrink();
    }

    tracing::warn!(backtracks = cfg.max_backtracks(), slope, "line search failed");
    Err(OptimizationError::LineSearchFailed { backtracks: cfg.max_backtracks() })
}
