//! Adaptive Simpson quadrature.
//!
//! A panel `[a, b]` with Simpson estimate `S` is split in two halves with
//! estimates `S_l`, `S_r`. With `S_2 = S_l + S_r`:
//!
//! ```text
//! |S_2 - S| <= 15 tol   ->  accept S_2 + (S_2 - S) / 15
//! otherwise             ->  recurse on both halves with tol / 2
//! ```
//!
//! Recursion deeper than `max_depth` fails with
//! [`QuadratureError::MaxSubdivision`].

use crate::quadrature::config::AdaptiveSimpsonCfg;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::integrand::{oriented, Integrand};
use crate::quadrature::report::QuadratureReport;


const ALGORITHM_NAME: &str = "adaptive simpson";


#[inline]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}


/// Panel end points, their values and the panel's Simpson estimate.
#[derive(Debug, Copy, Clone)]
struct Panel {
    a:     f64,
    b:     f64,
    fa:    f64,
    fm:    f64,
    fb:    f64,
    whole: f64,
}


struct Adaptive<'g, F> {
    g:         &'g mut Integrand<F>,
    max_depth: usize,
    accepted:  usize,
    error:     f64,
}

impl<F: FnMut(f64) -> f64> Adaptive<'_, F> {
    fn refine(&mut self, p: Panel, tol: f64, depth: usize) -> Result<f64, QuadratureError> {
        let m  = 0.5 * (p.a + p.b);
        let lm = 0.5 * (p.a + m);
        let rm = 0.5 * (m + p.b);

        let flm   = self.g.eval(lm)?;
        let frm   = self.g.eval(rm)?;
        let left  = simpson(p.a, m, p.fa, flm, p.fm);
        let right = simpson(m, p.b, p.fm, frm, p.fb);
        let delta = left + right - p.whole;

        if delta.abs() <= 15.0 * tol {
            self.accepted += 1;
            self.error    += delta.abs() / 15.0;
            return Ok(left + right + delta / 15.0);
        }
        // no representable midpoint left either
        if depth >= self.max_depth || lm <= p.a || rm >= p.b {
            return Err(QuadratureError::MaxSubdivision { depth, a: p.a, b: p.b });
        }

        tracing::trace!(a = p.a, b = p.b, depth, delta, "panel split");
        let l = Panel { a: p.a, b: m, fa: p.fa, fm: flm, fb: p.fm, whole: left };
        let r = Panel { a: m, b: p.b, fa: p.fm, fm: frm, fb: p.fb, whole: right };
        Ok(self.refine(l, 0.5 * tol, depth + 1)? + self.refine(r, 0.5 * tol, depth + 1)?)
    }
}


/// Integrates `f` over `[a, b]` to the absolute tolerance of `cfg`.
///
/// # Returns
/// [`QuadratureReport`] with
/// - `estimated_error` : sum of `|S_2 - S| / 15` over accepted panels
/// - `subintervals`    : number of accepted panels
///
/// # Errors
/// - [`QuadratureError::InvalidInterval`]     : non-finite end point
/// - [`QuadratureError::NonFiniteEvaluation`] : `f` returned NaN/inf
/// - [`QuadratureError::MaxSubdivision`]      : `max_depth` exceeded
pub fn adaptive_simpson<F: FnMut(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    cfg: AdaptiveSimpsonCfg,
) -> Result<QuadratureReport, QuadratureError> {
    let (lo, hi, sign) = oriented(a, b)?;
    if lo == hi {
        return Ok(QuadratureReport::empty(ALGORITHM_NAME));
    }

    let mut g = Integrand::new(f);
    let fa = g.eval(lo)?;
    let fm = g.eval(0.5 * (lo + hi))?;
    let fb = g.eval(hi)?;
    let root = Panel { a: lo, b: hi, fa, fm, fb, whole: simpson(lo, hi, fa, fm, fb) };

    let mut adaptive = Adaptive { g: &mut g, max_depth: cfg.max_depth(), accepted: 0, error: 0.0 };
    let integral = match adaptive.refine(root, cfg.abs_tol(), 0) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "adaptive simpson failed");
            return Err(e);
        }
    };
    let (accepted, error) = (adaptive.accepted, adaptive.error);

    let report = QuadratureReport {
        integral:        sign * integral,
        estimated_error: error,
        evaluations:     g.evaluations,
        subintervals:    accepted,
        algorithm_name:  ALGORITHM_NAME,
    };
    report.log();
    Ok(report)
}
