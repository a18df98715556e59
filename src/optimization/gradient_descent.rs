//! Steepest descent, `x_{k+1} = x_k - α_k ∇f(x_k)`, with `α_k` from
//! [`backtracking`].

use crate::optimization::config::{GradientDescentCfg, DEFAULT_GD_MAX_ITER};
use crate::optimization::errors::OptimizationError;
use crate::optimization::line_search::backtracking;
use crate::optimization::objective::{check_start, gradient, value};
use crate::optimization::report::{OptimizationReport, TerminationReason};
use crate::primitives::Vector;


const ALGORITHM_NAME: &str = "gradient descent";


/// Minimizes `f` from `x0` given its gradient `grad`.
///
/// # Errors
/// - [`OptimizationError::EmptyPoint`], [`OptimizationError::NonFiniteStart`]
/// - [`OptimizationError::NonFiniteObjective`] : `f(x0)` is NaN/inf
/// - [`OptimizationError::GradientLength`], [`OptimizationError::NonFiniteGradient`]
/// - [`OptimizationError::LineSearchFailed`]
pub fn gradient_descent<F, G>(
    f: F,
    grad: G,
    x0: &Vector,
    cfg: GradientDescentCfg,
) -> Result<OptimizationReport, OptimizationError>
where
    F: Fn(&Vector) -> f64,
    G: Fn(&Vector) -> Vector,
{
    check_start(x0)?;
    let max_iter = cfg.common().tolerance().max_iter_or(DEFAULT_GD_MAX_ITER);
    let tol      = cfg.common().tolerance();

    let mut x  = x0.clone();
    let mut fx = value(&f, &x)?;
    let mut g  = gradient(&grad, &x)?;
    let mut evaluations = 1;
    let mut iterations  = 0;
    let mut last_step   = 0.0;

    let termination_reason = loop {
        if g.norm2() <= cfg.common().grad_tol() {
            break TerminationReason::GradientTolReached;
        }
        if iterations >= max_iter {
            break TerminationReason::IterationLimit;
        }

        let p  = -&g;
        let ls = backtracking(&f, &x, fx, &g, &p, cfg.line_search())?;
        evaluations += ls.evaluations;
        iterations  += 1;

        let step = ls.alpha * p.norm2();
        last_step = step;
        x  = ls.x;
        fx = ls.f_x;
        g  = gradient(&grad, &x)?;
        tracing::trace!(iteration = iterations, f_x = fx, alpha = ls.alpha, "descent step");

        if tol.is_satisfied(step, x.norm2()) {
            break TerminationReason::StepTolReached;
        }
    };

    let report = OptimizationReport {
        gradient_norm: g.norm2(),
        estimated_error: last_step,
        x,
        f_x: fx,
        iterations,
        evaluations,
        termination_reason,
        algorithm_name: ALGORITHM_NAME,
    };
    report.log();
    Ok(report)
}
