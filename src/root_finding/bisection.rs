//! Bisection method

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil};
use super::tolerances::DynamicTolerance;
use super::signs::{opposite_sign, same_sign};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: sign(f(a)) = sign(f(b))")]
    NoSignChange { a: f64, b: f64 },
}


/// Bisection configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`bisection`] resolves it to the
///   theoretical number of halvings, capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of [a, b], written to avoid overflow for wide brackets.
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Number of halvings needed to shrink `[a, b]` below `tol`.
///
/// Returns [`GLOBAL_MAX_ITER_FALLBACK`] when `tol` is zero, since the
/// bound is then infinite and only machine precision stops the loop.
#[inline]
pub(crate) fn theoretical_iter(a: f64, b: f64, tol: f64) -> usize {
    let width = (b - a).abs();
    if tol <= 0.0 {
        return GLOBAL_MAX_ITER_FALLBACK;
    }
    if width <= tol {
        return 0;
    }
    let n = (width / tol).log2().ceil();
    if n.is_finite() { n as usize } else { GLOBAL_MAX_ITER_FALLBACK }
}


/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` and that `f(a)`, `f(b)` have
/// opposite signs, so a root exists in the bracket.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : lower bound (finite)
/// - `b`    : upper bound (finite, strictly greater than `a`)
/// - `cfg`  : [`BisectionCfg`]
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`            : midpoint of the final bracket
/// - `estimated_error` : half-width of the final bracket
/// - `stencil`         : final bracket `[left, right]`
/// - `algorithm_name`  : "bisection"
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a`/`b` non-finite or `a >= b`
/// - [`BisectionError::NoSignChange`]  : f(a) and f(b) share sign
///
/// * Propagated via [`BisectionError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
///
/// * Propagated via [`BisectionError::Tolerance`]
/// - [`ToleranceError::InvalidTolerance`] : computed width tolerance non-finite
///
/// # Notes
/// - Stops on `|f(m)| <= abs_fx`, on `b - a <= abs_x + rel_x * max(|a|, |b|)`,
///   or when the midpoint is no longer distinct from the bounds.
/// - The theoretical bound uses the tolerance at the smallest `|x|` in the
///   bracket, so it holds however the bracket shrinks.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    let algo_name = algorithm.algorithm_name();

    let abs_fx    = cfg.common.abs_fx();
    let abs_x     = cfg.common.abs_x();
    let rel_x     = cfg.common.rel_x();
    let max_iter  = cfg.common.max_iter();

    let mut evals: usize = 0;

    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        evals += 1;
        let fx = func(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    // early exit: a or b is a root
    let mut fa = eval(a)?;
    if fa.abs() <= abs_fx {
        let report = RootFindingReport {
            root                : a,
            f_root              : fa,
            iterations          : 0,
            evaluations         : evals,
            estimated_error     : 0.0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::bracket(a, b),
            algorithm_name      : algo_name,
        };
        report.log();
        return Ok(report);
    }
    let fb = eval(b)?;
    if fb.abs() <= abs_fx {
        let report = RootFindingReport {
            root                : b,
            f_root              : fb,
            iterations          : 0,
            evaluations         : evals,
            estimated_error     : 0.0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            stencil             : Stencil::bracket(a, b),
            algorithm_name      : algo_name,
        };
        report.log();
        return Ok(report);
    }

    if same_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    // smallest |x| in [a, b] drives the tightest tolerance
    let min_abs = if a <= 0.0 && b >= 0.0 { 0.0 } else { a.abs().min(b.abs()) };
    let worst_tol = algorithm.calculate_tolerance(
        &DynamicTolerance::WidthTol { a: min_abs, b: min_abs },
        abs_x,
        rel_x
    )?;
    let num_iter = match max_iter {
        Some(v) => v,
        None    => theoretical_iter(a, b, worst_tol).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut width_tol = algorithm.calculate_tolerance(
        &DynamicTolerance::WidthTol { a, b },
        abs_x,
        rel_x
    )?;

    let mut mid = midpoint(a, b);
    let mut fm  = f64::NAN;
    let mut iterations = 0;
    let mut outcome = (TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached);

    if b - a <= width_tol {
        outcome = (TerminationReason::ToleranceReached, ToleranceSatisfied::WidthTolReached);
    } else {
        for iter in 1..=num_iter {
            iterations = iter;
            mid = midpoint(a, b);

            if mid <= a || mid >= b {
                outcome = (
                    TerminationReason::MachinePrecisionReached,
                    ToleranceSatisfied::WidthTolReached
                );
                break;
            }

            fm = eval(mid)?;
            tracing::trace!(algorithm = algo_name, iter, a, b, mid, fm, "bisection step");

            if fm.abs() <= abs_fx {
                outcome = (TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached);
                break;
            }

            if opposite_sign(fa, fm) {
                b  = mid;
            } else {
                a  = mid;
                fa = fm;
            }

            width_tol = algorithm.calculate_tolerance(
                &DynamicTolerance::WidthTol { a, b },
                abs_x,
                rel_x
            )?;
            if b - a <= width_tol {
                outcome = (TerminationReason::ToleranceReached, ToleranceSatisfied::WidthTolReached);
                break;
            }
        }
    }

    // report the midpoint of the final bracket unless f(mid) already met abs_fx
    if outcome.1 != ToleranceSatisfied::AbsFxReached {
        mid = midpoint(a, b);
        fm  = eval(mid)?;
    }

    let report = RootFindingReport {
        root                : mid,
        f_root              : fm,
        iterations,
        evaluations         : evals,
        estimated_error     : 0.5 * (b - a),
        termination_reason  : outcome.0,
        tolerance_satisfied : outcome.1,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : algo_name,
    };
    report.log();
    Ok(report)
}
