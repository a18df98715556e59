//! Golden-section search for a minimum of a unimodal `f` on `[a, b]`.
//!
//! Two interior points `c < d` split the bracket in the golden ratio;
//! the side beyond the larger of `f(c)`, `f(d)` is discarded and one
//! interior point is reused, so each iteration costs one evaluation and
//! shrinks the bracket by `1/φ ≈ 0.618`.

use crate::optimization::config::GoldenSectionCfg;
use crate::optimization::errors::OptimizationError;
use crate::optimization::report::{GoldenSectionReport, TerminationReason};


const ALGORITHM_NAME: &str = "golden section";

/// `1/φ = (√5 - 1) / 2`
const INV_PHI: f64 = 0.618_033_988_749_894_8;


fn eval<F: FnMut(f64) -> f64>(
    f: &mut F,
    x: f64,
    evaluations: &mut usize,
) -> Result<f64, OptimizationError> {
    *evaluations += 1;
    let fx = f(x);
    if !fx.is_finite() {
        return Err(OptimizationError::NonFiniteObjective { fx });
    }
    Ok(fx)
}


/// Minimizes `f` over `[a, b]`.
///
/// For a non-unimodal `f` the result is a local minimum inside the
/// bracket. Running out of iterations is reported through
/// [`GoldenSectionReport::converged`].
///
/// # Errors
/// - [`OptimizationError::InvalidBracket`]     : non-finite end point or `a >= b`
/// - [`OptimizationError::NonFiniteObjective`] : `f` returned NaN/inf
pub fn golden_section<F: FnMut(f64) -> f64>(
    mut f: F,
    a: f64,
    b: f64,
    cfg: GoldenSectionCfg,
) -> Result<GoldenSectionReport, OptimizationError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(OptimizationError::InvalidBracket { a, b });
    }

    let (mut a, mut b) = (a, b);
    let mut evaluations = 0;
    let mut c  = b - INV_PHI * (b - a);
    let mut d  = a + INV_PHI * (b - a);
    let mut fc = eval(&mut f, c, &mut evaluations)?;
    let mut fd = eval(&mut f, d, &mut evaluations)?;
    let mut iterations = 0;

    let termination_reason = loop {
        if b - a <= cfg.x_tol() {
            break TerminationReason::BracketTolReached;
        }
        if iterations >= cfg.max_iter() {
            break TerminationReason::IterationLimit;
        }

        if fc <= fd {
            b  = d;
            d  = c;
            fd = fc;
            c  = b - INV_PHI * (b - a);
            fc = eval(&mut f, c, &mut evaluations)?;
        } else {
            a  = c;
            c  = d;
            fc = fd;
            d  = a + INV_PHI * (b - a);
            fd = eval(&mut f, d, &mut evaluations)?;
        }
        iterations += 1;
        tracing::trace!(a, b, "bracket reduced");
    };

    let (x, f_x) = if fc <= fd { (c, fc) } else { (d, fd) };
    let report = GoldenSectionReport {
        x,
        f_x,
        bracket: [a, b],
        estimated_error: 0.5 * (b - a),
        iterations,
        evaluations,
        termination_reason,
        algorithm_name: ALGORITHM_NAME,
    };
    if report.converged() {
        tracing::debug!(x, f_x, estimated_error = report.estimated_error, iterations, "golden section converged");
    } else {
        tracing::warn!(x, width = b - a, iterations, "golden section stopped at iteration limit");
    }
    Ok(report)
}
