//! Secant method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil};
use super::tolerances::DynamicTolerance;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got x0={x0}, x1={x1}")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant at x={x}: f(x_k) = f(x_(k-1)) = {fx}")]
    DegenerateSecantStep { x: f64, fx: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// x-intercept of the line through `(x1, fx1)` and `(x2, fx2)`.
///
/// # Returns
/// - `Some(x)` : finite intercept
/// - `None`    : `fx1 == fx2` or the intercept is not representable
#[inline]
pub(crate) fn secant_x_intercept(
    (x1, fx1): (f64, f64),
    (x2, fx2): (f64, f64),
) -> Option<f64> {
    let denom = fx2 - fx1;
    if denom == 0.0 {
        return None;
    }
    let x = x2 - fx2 * (x2 - x1) / denom;
    x.is_finite().then_some(x)
}


/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : first initial guess (finite, distinct from `x1`)
/// - `x1`   : second initial guess
/// - `cfg`  : [`SecantCfg`]
///
/// # Returns
/// [`RootFindingReport`] with
/// - `estimated_error` : `|x_{k+1} - x_k|` of the last step
/// - `stencil`         : previous pair `{x_k, x_{k-1}}` used to form the step
/// - `algorithm_name`  : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]         : `x0`/`x1` non-finite or equal
/// - [`SecantError::DegenerateSecantStep`] : `f(x_k) == f(x_{k-1})`
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Notes
/// - Update: `x_{k+1} = x_k - f(x_k) (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))`
/// - Stops on `|x_{k+1} - x_k| <= abs_x + rel_x * |x_{k+1}|` or `|f| <= abs_fx`.
/// - Convergence is superlinear (~1.618) near simple roots but local only.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let abs_x     = cfg.common.abs_x();
    let rel_x     = cfg.common.rel_x();
    let abs_fx    = cfg.common.abs_fx();
    let algorithm = Algorithm::Open(OpenFamily::Secant);
    let algo_name = algorithm.algorithm_name();

    let num_iter = cfg.common.max_iter().unwrap_or_else(|| {
        algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
    });

    let mut evals = 0;

    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    // early exit: x0 or x1 is a root
    let fx0 = eval(x0)?;
    if fx0.abs() <= abs_fx {
        let report = RootFindingReport {
            root                : x0,
            f_root              : fx0,
            iterations          : 0,
            evaluations         : evals,
            estimated_error     : 0.0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::singleton(x0),
            algorithm_name      : algo_name
        };
        report.log();
        return Ok(report);
    }
    let fx1 = eval(x1)?;
    if fx1.abs() <= abs_fx {
        let report = RootFindingReport {
            root                : x1,
            f_root              : fx1,
            iterations          : 0,
            evaluations         : evals,
            estimated_error     : (x1 - x0).abs(),
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::singleton(x1),
            algorithm_name      : algo_name
        };
        report.log();
        return Ok(report);
    }

    let (mut x_prev, mut f_prev) = (x0, fx0);
    let (mut x, mut fx)          = (x1, fx1);
    let mut step = (x1 - x0).abs();

    for iter in 1..=num_iter {
        let x_next = secant_x_intercept((x_prev, f_prev), (x, fx))
            .ok_or(SecantError::DegenerateSecantStep { x, fx })?;
        let f_next = eval(x_next)?;
        step = (x_next - x).abs();
        tracing::trace!(algorithm = algo_name, iter, x = x_next, fx = f_next, step, "secant step");

        let satisfied = if f_next.abs() <= abs_fx {
            Some(ToleranceSatisfied::AbsFxReached)
        } else {
            let step_tol = algorithm.calculate_tolerance(
                &DynamicTolerance::StepTol { x: x_next },
                abs_x,
                rel_x
            )?;
            (step <= step_tol).then_some(ToleranceSatisfied::StepSizeReached)
        };

        if let Some(tolerance_satisfied) = satisfied {
            let report = RootFindingReport {
                root                : x_next,
                f_root              : f_next,
                iterations          : iter,
                evaluations         : evals,
                estimated_error     : step,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                stencil             : Stencil::doubleton(x, x_prev),
                algorithm_name      : algo_name
            };
            report.log();
            return Ok(report);
        }

        (x_prev, f_prev) = (x, fx);
        (x, fx)          = (x_next, f_next);
    }

    let report = RootFindingReport {
        root                : x,
        f_root              : fx,
        iterations          : num_iter,
        evaluations         : evals,
        estimated_error     : step,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::doubleton(x, x_prev),
        algorithm_name      : algo_name
    };
    report.log();
    Ok(report)
}
