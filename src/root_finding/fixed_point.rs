//! Fixed-point iteration

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil};
use super::tolerances::DynamicTolerance;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("fixed-point iteration diverged after {iterations} iterations: g({x}) = {gx}")]
    Diverged { x: f64, gx: f64, iterations: usize },
}


/// Fixed-point configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// `abs_fx` applies to the residual `|g(x) - x|`.
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for FixedPointCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(FixedPointCfg);


/// Finds a fixed point `x = g(x)` by iterating `x_{k+1} = g(x_k)`.
///
/// # Arguments
/// - `g`   : iteration map
/// - `x0`  : finite initial guess
/// - `cfg` : [`FixedPointCfg`]
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`            : last iterate `x_{k+1}`
/// - `f_root`          : residual `g(x_k) - x_k` of the last step
/// - `estimated_error` : `|x_{k+1} - x_k|`
/// - `algorithm_name`  : "fixed_point"
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `x0` non-finite
/// - [`FixedPointError::Diverged`]     : an iterate became NaN/inf
///
/// # Notes
/// - Converges linearly when `|g'| < 1` near the fixed point.
/// - Same stopping rule as the open methods:
///   `|x_{k+1} - x_k| <= abs_x + rel_x * |x_{k+1}|`.
pub fn fixed_point<G>(
    mut g: G,
    x0: f64,
    cfg: FixedPointCfg
) -> Result<RootFindingReport, FixedPointError>
where G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }

    let algorithm = Algorithm::Open(OpenFamily::FixedPoint);
    let algo_name = algorithm.algorithm_name();

    let abs_fx    = cfg.common.abs_fx();
    let abs_x     = cfg.common.abs_x();
    let rel_x     = cfg.common.rel_x();
    let num_iter  = cfg.common.max_iter().unwrap_or_else(|| {
        algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
    });

    let mut evals: usize = 0;
    let mut x    = x0;
    let mut step     = f64::INFINITY;
    let mut residual = f64::INFINITY;

    for iter in 1..=num_iter {
        let gx = { evals += 1; g(x) };
        if !gx.is_finite() {
            return Err(FixedPointError::Diverged { x, gx, iterations: iter });
        }

        residual = gx - x;
        step     = residual.abs();
        tracing::trace!(algorithm = algo_name, iter, x = gx, step, "fixed point step");

        let satisfied = if step <= abs_fx {
            Some(ToleranceSatisfied::AbsFxReached)
        } else {
            let step_tol = algorithm.calculate_tolerance(
                &DynamicTolerance::StepTol { x: gx },
                abs_x,
                rel_x
            )?;
            (step <= step_tol).then_some(ToleranceSatisfied::StepSizeReached)
        };

        if let Some(tolerance_satisfied) = satisfied {
            let report = RootFindingReport {
                root                : gx,
                f_root              : residual,
                iterations          : iter,
                evaluations         : evals,
                estimated_error     : step,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                stencil             : Stencil::singleton(x),
                algorithm_name      : algo_name,
            };
            report.log();
            return Ok(report);
        }

        x = gx;
    }

    let report = RootFindingReport {
        root                : x,
        f_root              : residual,
        iterations          : num_iter,
        evaluations         : evals,
        estimated_error     : step,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::singleton(x),
        algorithm_name      : algo_name,
    };
    report.log();
    Ok(report)
}
