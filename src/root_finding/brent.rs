//! Brent's method (Dekker–Brent zeroin)

use super::algorithms::{Algorithm, CompoundFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil};
use super::tolerances::DynamicTolerance;
use super::signs::same_sign;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum BrentError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite with a < b got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: sign(f(a)) = sign(f(b))")]
    NoSignChange { a: f64, b: f64 },
}


/// Brent's Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`brent`] uses [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BrentCfg {
    common: CommonCfg
}
impl BrentCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for BrentCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BrentCfg);


/// Interpolation step proposed from the last three points.
///
/// Uses a secant step when only two distinct abscissae are available
/// (`a == c`), inverse quadratic interpolation otherwise.
///
/// # Returns
/// `(p, q)` with `p >= 0` such that the step is `p / q`.
#[inline]
fn interpolation_step(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    (c, fc): (f64, f64),
    xm: f64,
) -> (f64, f64) {
    let s = fb / fa;
    let (p, q) = if a == c {
        (2.0 * xm * s, 1.0 - s)
    } else {
        let q = fa / fc;
        let r = fb / fc;
        (
            s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
            (q - 1.0) * (r - 1.0) * (s - 1.0),
        )
    };
    if p > 0.0 { (p, -q) } else { (-p, q) }
}


/// Finds a root using Brent's method (bisection + secant + inverse quadratic interpolation).
///
/// Assumes `func` is continuous on `[a, b]` and `f(a)`, `f(b)` have opposite
/// signs. Each step keeps a sign-change bracket `[b, c]` with `|f(b)| <= |f(c)|`;
/// an interpolated step is accepted only if it falls well inside the bracket
/// and shrinks faster than the step before last, else a bisection step is taken.
///
/// # Arguments
/// - `func` : function to evaluate
/// - `a`    : lower bound of the initial bracket (finite)
/// - `b`    : upper bound of the initial bracket (finite, strictly greater than `a`)
/// - `cfg`  : [`BrentCfg`] (tolerances; optional max_iter)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`            : best end of the final bracket
/// - `estimated_error` : half-width of the final bracket
/// - `stencil`         : final bracket
/// - `algorithm_name`  : "brent"
///
/// # Errors
/// - [`BrentError::InvalidBounds`] : `a`/`b` non-finite or `a >= b`
/// - [`BrentError::NoSignChange`]  : f(a) and f(b) share sign on [a, b]
///
/// * Propagated via [`BrentError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
///
/// # Notes
/// - Globally convergent for continuous f with a valid sign-change bracket,
///   typically superlinear near simple roots.
pub fn brent<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BrentCfg
) -> Result<RootFindingReport, BrentError>
where F: FnMut(f64) -> f64 {

    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(BrentError::InvalidBounds { a, b });
    }

    let abs_x     = cfg.common.abs_x();
    let rel_x     = cfg.common.rel_x();
    let abs_fx    = cfg.common.abs_fx();
    let algorithm = Algorithm::Compound(CompoundFamily::Brent);
    let algo_name = algorithm.algorithm_name();
    let num_iter  = cfg.common.max_iter().unwrap_or_else(|| {
        algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
    });

    let mut evals: usize = 0;

    let mut eval = |x: f64| -> Result<f64, BrentError> {
        evals += 1;
        let fx = func(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let (mut a, mut b) = (a, b);
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    // early exit: a or b is a root
    for (x, fx) in [(a, fa), (b, fb)] {
        if fx.abs() <= abs_fx {
            let report = RootFindingReport {
                root                : x,
                f_root              : fx,
                iterations          : 0,
                evaluations         : evals,
                estimated_error     : 0.0,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name
            };
            report.log();
            return Ok(report);
        }
    }

    if same_sign(fa, fb) {
        return Err(BrentError::NoSignChange { a, b });
    }

    let (mut c, mut fc) = (a, fa);
    let mut d = b - a;
    let mut e = d;

    for iter in 0..=num_iter {
        // keep [b, c] a sign-change bracket
        if same_sign(fb, fc) {
            c  = a;
            fc = fa;
            d  = b - a;
            e  = d;
        }
        // b is the best estimate
        if fc.abs() < fb.abs() {
            a  = b;
            b  = c;
            c  = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let width_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::WidthTol { a: b, b },
            abs_x,
            rel_x
        )?;
        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * width_tol;
        let xm   = 0.5 * (c - b);

        let satisfied = if fb.abs() <= abs_fx {
            Some(ToleranceSatisfied::AbsFxReached)
        } else if xm.abs() <= tol1 {
            Some(ToleranceSatisfied::WidthTolReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            let report = RootFindingReport {
                root                : b,
                f_root              : fb,
                iterations          : iter,
                evaluations         : evals,
                estimated_error     : xm.abs(),
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                stencil             : Stencil::bracket(b, c),
                algorithm_name      : algo_name
            };
            report.log();
            return Ok(report);
        }
        if iter == num_iter {
            break;
        }

        let mut bisect = true;
        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let (p, q) = interpolation_step((a, fa), (b, fb), (c, fc), xm);
            if 2.0 * p < (3.0 * xm * q - (tol1 * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
                bisect = false;
            }
        }
        if bisect {
            d = xm;
            e = d;
        }

        a  = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = eval(b)?;
        tracing::trace!(algorithm = algo_name, iter, b, fb, bisect, "brent step");
    }

    let report = RootFindingReport {
        root                : b,
        f_root              : fb,
        iterations          : num_iter,
        evaluations         : evals,
        estimated_error     : 0.5 * (c - b).abs(),
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::bracket(b, c),
        algorithm_name      : algo_name
    };
    report.log();
    Ok(report)
}
