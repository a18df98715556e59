//! Composite quadrature rules.
//!
//! `[a, b]` is split into `n` equal subintervals of width `h`:
//!
//! ┌ midpoint  : `h Σ f(x_i + h/2)`
//! ├ trapezoid : `h (f_0/2 + f_1 + ... + f_{n-1} + f_n/2)`
//! ├ simpson   : `h/3 (f_0 + 4 f_1 + 2 f_2 + ... + 4 f_{n-1} + f_n)`, `n` even
//! └ gauss     : `k`-point Gauss–Legendre on every subinterval
//!
//! The rule is applied with `n` and `2n` subintervals; for a rule of order
//! `p` the error of the `n`-estimate is taken as
//! `|Q_2n - Q_n| · 2^p / (2^p - 1)`.

use crate::quadrature::algorithms::Rule;
use crate::quadrature::config::CompositeCfg;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::gauss_legendre::{nodes_and_weights, MAX_GAUSS_POINTS};
use crate::quadrature::integrand::{oriented, Integrand};
use crate::quadrature::report::QuadratureReport;


fn apply<F: FnMut(f64) -> f64>(
    rule: Rule,
    g: &mut Integrand<F>,
    lo: f64,
    hi: f64,
    n: usize,
    gauss: Option<&(Vec<f64>, Vec<f64>)>,
) -> Result<f64, QuadratureError> {
    let h = (hi - lo) / n as f64;
    let node = |i: usize| if i == n { hi } else { lo + i as f64 * h };

    let sum = match (rule, gauss) {
        (Rule::Midpoint, _) => {
            let mut s = 0.0;
            for i in 0..n {
                s += g.eval(lo + (i as f64 + 0.5) * h)?;
            }
            h * s
        }
        (Rule::Trapezoid, _) => {
            let mut s = 0.5 * (g.eval(lo)? + g.eval(hi)?);
            for i in 1..n {
                s += g.eval(node(i))?;
            }
            h * s
        }
        (Rule::Simpson, _) => {
            let mut s = g.eval(lo)? + g.eval(hi)?;
            for i in 1..n {
                let w = if i % 2 == 1 { 4.0 } else { 2.0 };
                s += w * g.eval(node(i))?;
            }
            h * s / 3.0
        }
        (Rule::GaussLegendre(_), Some((t, w))) => {
            let half = 0.5 * h;
            let mut s = 0.0;
            for i in 0..n {
                let mid = 0.5 * (node(i) + node(i + 1));
                for (tj, wj) in t.iter().zip(w) {
                    s += wj * g.eval(mid + half * tj)?;
                }
            }
            half * s
        }
        (Rule::GaussLegendre(k), None) => {
            return Err(QuadratureError::InvalidGaussPoints { got: k, max: MAX_GAUSS_POINTS });
        }
    };
    Ok(sum)
}


/// Integrates `f` over `[a, b]` with a composite [`Rule`].
///
/// `b < a` integrates the reversed interval and flips the sign; `a == b`
/// returns `0` without evaluating `f`.
///
/// # Errors
/// - [`QuadratureError::InvalidInterval`]     : non-finite end point
/// - [`QuadratureError::OddSubintervals`]     : Simpson with odd `n`
/// - [`QuadratureError::InvalidGaussPoints`]  : `k` outside `1..=MAX_GAUSS_POINTS`
/// - [`QuadratureError::NonFiniteEvaluation`] : `f` returned NaN/inf
pub fn composite<F: FnMut(f64) -> f64>(
    rule: Rule,
    f: F,
    a: f64,
    b: f64,
    cfg: CompositeCfg,
) -> Result<QuadratureReport, QuadratureError> {
    let n = cfg.subintervals();
    if let Rule::GaussLegendre(k) = rule {
        if !rule.is_valid() {
            return Err(QuadratureError::InvalidGaussPoints { got: k, max: MAX_GAUSS_POINTS });
        }
    }
    if rule == Rule::Simpson && n % 2 != 0 {
        return Err(QuadratureError::OddSubintervals { got: n });
    }
    let (lo, hi, sign) = oriented(a, b)?;
    if lo == hi {
        return Ok(QuadratureReport::empty(rule.rule_name()));
    }

    let gauss = match rule {
        Rule::GaussLegendre(k) => Some(nodes_and_weights(k)?),
        _ => None,
    };

    let mut g = Integrand::new(f);
    let coarse = apply(rule, &mut g, lo, hi, n, gauss.as_ref())?;
    let fine   = apply(rule, &mut g, lo, hi, 2 * n, gauss.as_ref())?;

    let two_p = 2.0_f64.powi(rule.order());
    let report = QuadratureReport {
        integral:        sign * coarse,
        estimated_error: (fine - coarse).abs() * two_p / (two_p - 1.0),
        evaluations:     g.evaluations,
        subintervals:    n,
        algorithm_name:  rule.rule_name(),
    };
    report.log();
    Ok(report)
}
