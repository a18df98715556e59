//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil};
use super::tolerances::DynamicTolerance;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


/// Derivatives with `|f'(x)| <= DEFAULT_MIN_DERIVATIVE` stop the iteration.
pub const DEFAULT_MIN_DERIVATIVE: f64 = f64::MIN_POSITIVE;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid max step, must be > 0 or f64::INFINITY. got {step}")]
    InvalidMaxStep { step: f64 },

    #[error("invalid derivative threshold, must be finite and >= 0. got {got}")]
    InvalidMinDerivative { got: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("newton diverged at x={x}: derivative f'(x)={dfx} too small for a finite step")]
    Divergence { x: f64, dfx: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common`         : [`CommonCfg`] with tolerances and optional `max_iter`.
/// - `max_step`       : limit on the absolute Newton step (default: ∞).
/// - `min_derivative` : `|f'(x)|` at or below this is a divergence
///                      (default: [`DEFAULT_MIN_DERIVATIVE`]).
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common:         CommonCfg,
    max_step:       f64,
    min_derivative: f64,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common:         CommonCfg::new(),
            max_step:       f64::INFINITY,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
        }
    }
    pub fn set_max_step(mut self, v: f64) -> Result<Self, NewtonError> {
        if v <= 0.0 || v.is_nan() {
            return Err(NewtonError::InvalidMaxStep { step: v });
        }
        self.max_step = v;
        Ok(self)
    }
    pub fn set_min_derivative(mut self, v: f64) -> Result<Self, NewtonError> {
        if !v.is_finite() || v < 0.0 {
            return Err(NewtonError::InvalidMinDerivative { got: v });
        }
        self.min_derivative = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn max_step(&self)       -> f64 { self.max_step }
    #[inline] #[must_use] pub fn min_derivative(&self) -> f64 { self.min_derivative }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

#[inline]
fn eval_dfx_checked<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerances, optional `max_iter`, `max_step`, `min_derivative`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `evaluations`     : total evaluations (f and f')
/// - `estimated_error` : `|x_{k+1} - x_k|` of the last step
/// - `stencil`         : previous iterate used to form the step
/// - `algorithm_name`  : "newton"
///
/// When the iteration cap is hit the report carries the last iterate and
/// [`RootFindingReport::converged`] returns `false`.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeNotFinite`] : `f'(x)` NaN/inf
/// - [`NewtonError::Divergence`]          : `|f'(x)| <= min_derivative`, or the step
///                                          `x - f/f'` is not representable
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Step: `-f/f'`, clipped to `max_step`.
/// - Stops on `|x_{k+1} - x_k| <= abs_x + rel_x * |x_{k+1}|` or `|f| <= abs_fx`.
/// - Stagnation: if `x + step == x`, returns [`TerminationReason::MachinePrecisionReached`].
///
/// # Notes
/// - Convergence is quadratic near simple roots but *local only*. For
///   guaranteed convergence, use a bracketed method (bisection/Brent).
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let algorithm = Algorithm::Open(OpenFamily::Newton);
    let algo_name = algorithm.algorithm_name();

    let abs_fx    = cfg.common.abs_fx();
    let abs_x     = cfg.common.abs_x();
    let rel_x     = cfg.common.rel_x();
    let max_step  = cfg.max_step;
    let min_dfx   = cfg.min_derivative;

    let num_iter = cfg.common.max_iter().unwrap_or_else(|| {
        algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
    });

    let mut evals: usize = 0;

    // early exit: x0 is root
    let mut x  = x0;
    let mut fx = eval_fx_checked(&mut func, x, &mut evals)?;
    if fx.abs() <= abs_fx {
        let report = RootFindingReport {
            root                : x0,
            f_root              : fx,
            iterations          : 0,
            evaluations         : evals,
            estimated_error     : 0.0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::singleton(x0),
            algorithm_name      : algo_name,
        };
        report.log();
        return Ok(report);
    }

    let mut prev_x    = x;
    let mut last_step = f64::INFINITY;
    for iter in 1..=num_iter {
        let dfx = eval_dfx_checked(&mut dfunc, x, &mut evals)?;
        if dfx.abs() <= min_dfx {
            return Err(NewtonError::Divergence { x, dfx });
        }

        let mut step = -fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::Divergence { x, dfx });
        }
        if step.abs() > max_step {
            step = step.signum() * max_step;
        }

        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::Divergence { x, dfx });
        }

        // machine stagnation
        if x_next == x {
            let report = RootFindingReport {
                root                : x,
                f_root              : fx,
                iterations          : iter,
                evaluations         : evals,
                estimated_error     : 0.0,
                termination_reason  : TerminationReason::MachinePrecisionReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::singleton(x),
                algorithm_name      : algo_name
            };
            report.log();
            return Ok(report);
        }

        let fx_next = eval_fx_checked(&mut func, x_next, &mut evals)?;
        last_step = (x_next - x).abs();
        tracing::trace!(algorithm = algo_name, iter, x = x_next, fx = fx_next, step = last_step, "newton step");

        let satisfied = if fx_next.abs() <= abs_fx {
            Some(ToleranceSatisfied::AbsFxReached)
        } else {
            let step_tol = algorithm.calculate_tolerance(
                &DynamicTolerance::StepTol { x: x_next },
                abs_x,
                rel_x
            )?;
            (last_step <= step_tol).then_some(ToleranceSatisfied::StepSizeReached)
        };

        if let Some(tolerance_satisfied) = satisfied {
            let report = RootFindingReport {
                root                : x_next,
                f_root              : fx_next,
                iterations          : iter,
                evaluations         : evals,
                estimated_error     : last_step,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                stencil             : Stencil::singleton(x),
                algorithm_name      : algo_name,
            };
            report.log();
            return Ok(report);
        }

        prev_x = x;
        x  = x_next;
        fx = fx_next;
    }

    let report = RootFindingReport {
        root                : x,
        f_root              : fx,
        iterations          : num_iter,
        evaluations         : evals,
        estimated_error     : last_step,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::singleton(prev_x),
        algorithm_name      : algo_name,
    };
    report.log();
    Ok(report)
}
