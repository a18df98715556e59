//! Newton's method with a backtracking line search.
//!
//! Each iteration solves `H(x_k) p = -∇f(x_k)` with an LU factorization
//! and searches along `p` starting from the full step `α = 1`. When `H`
//! is singular or `p` is not a descent direction (`gᵀp >= 0`, e.g. at a
//! saddle), [`NewtonFallback`] decides between a steepest-descent step
//! and failing.
//!
//! Without an explicit Hessian, the central-difference
//! [`hessian`](crate::differentiation::hessian()) of `f` is used.

use crate::differentiation;
use crate::linear_system::{LinearSystemError, LuFactorization, PivotCfg};
use crate::optimization::config::{NewtonCfg, NewtonFallback, DEFAULT_NEWTON_MAX_ITER};
use crate::optimization::errors::OptimizationError;
use crate::optimization::line_search::backtracking;
use crate::optimization::objective::{check_start, gradient, value};
use crate::optimization::report::{OptimizationReport, TerminationReason};
use crate::primitives::{Matrix, Vector};


const ALGORITHM_NAME: &str = "newton";


/// Hessian type to name when passing `None` to [`newton`].
pub type NoHessian = fn(&Vector) -> Matrix;


enum Direction {
    Newton(Vector),
    Singular(LinearSystemError),
    Uphill { slope: f64 },
}

fn newton_direction(h: &Matrix, g: &Vector) -> Result<Direction, OptimizationError> {
    let minus_g = -g;
    let p = match LuFactorization::new(h, PivotCfg::new()).and_then(|lu| lu.solve(&minus_g)) {
        Ok(p) => p,
        Err(e @ (LinearSystemError::Singular { .. } | LinearSystemError::NonFiniteEntry { .. })) => {
            return Ok(Direction::Singular(e));
        }
        Err(e) => return Err(e.into()),
    };
    let slope = g.dot(&p)?;
    if slope < 0.0 {
        Ok(Direction::Newton(p))
    } else {
        Ok(Direction::Uphill { slope })
    }
}


/// Minimizes `f` from `x0` given its gradient and, optionally, its Hessian.
///
/// ```ignore
/// let report = newton(f, grad, None::<NoHessian>, &x0, NewtonCfg::new())?;
/// ```
///
/// # Errors
/// - [`OptimizationError::EmptyPoint`], [`OptimizationError::NonFiniteStart`]
/// - [`OptimizationError::NonFiniteObjective`], [`OptimizationError::GradientLength`],
///   [`OptimizationError::NonFiniteGradient`]
/// - [`OptimizationError::HessianShape`] : supplied Hessian is not `n x n`
/// - [`OptimizationError::Differentiation`] : finite-difference Hessian failed
/// - [`OptimizationError::NonDescentDirection`] : with [`NewtonFallback::Fail`]
/// - [`OptimizationError::LinearSystem`] : singular Hessian with [`NewtonFallback::Fail`]
/// - [`OptimizationError::LineSearchFailed`]
pub fn newton<F, G, H>(
    f: F,
    grad: G,
    hessian: Option<H>,
    x0: &Vector,
    cfg: NewtonCfg,
) -> Result<OptimizationReport, OptimizationError>
where
    F: Fn(&Vector) -> f64,
    G: Fn(&Vector) -> Vector,
    H: Fn(&Vector) -> Matrix,
{
    check_start(x0)?;
    let n        = x0.len();
    let max_iter = cfg.common().tolerance().max_iter_or(DEFAULT_NEWTON_MAX_ITER);
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

        let h = match &hessian {
            Some(hess) => {
                let h = hess(&x);
                if h.shape() != (n, n) {
                    return Err(OptimizationError::HessianShape {
                        expected: n,
                        rows:     h.nrows(),
                        cols:     h.ncols(),
                    });
                }
                h
            }
            None => {
                let rep = differentiation::hessian(&f, &x, cfg.hessian())?;
                evaluations += rep.evaluations;
                rep.hessian
            }
        };

        let p = match (newton_direction(&h, &g)?, cfg.fallback()) {
            (Direction::Newton(p), _) => p,
            (Direction::Singular(e), NewtonFallback::Fail) => return Err(e.into()),
            (Direction::Uphill { slope }, NewtonFallback::Fail) => {
                return Err(OptimizationError::NonDescentDirection { slope });
            }
            (Direction::Singular(e), NewtonFallback::Damped) => {
                tracing::warn!(iteration = iterations, error = %e, "singular hessian, steepest descent step");
                -&g
            }
            (Direction::Uphill { slope }, NewtonFallback::Damped) => {
                tracing::warn!(iteration = iterations, slope, "newton step uphill, steepest descent step");
                -&g
            }
        };

        let ls = backtracking(&f, &x, fx, &g, &p, cfg.line_search())?;
        evaluations += ls.evaluations;
        iterations  += 1;

        let step = ls.alpha * p.norm2();
        last_step = step;
        x  = ls.x;
        fx = ls.f_x;
        g  = gradient(&grad, &x)?;
        tracing::trace!(iteration = iterations, f_x = fx, alpha = ls.alpha, "newton step");

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
