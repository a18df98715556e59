//! Not-a-Knot Cubic Spline
//!
//! The first two and the last two pieces share one cubic each, i.e. `S'''`
//! is continuous across `x[1]` and `x[n-2]`.
//!
//! ┌ `n = 2` : the straight line through both nodes
//! ├ `n = 3` : the interpolating parabola
//! └ `n ≥ 4` : tridiagonal slope system with the end rows below
//!
//! ```text
//! h[1] m[0] + (h[0] + h[1]) m[1]
//!     = ((h[0] + 2 (h[0] + h[1])) h[1] delta[0] + h[0]^2 delta[1]) / (h[0] + h[1])
//!
//! a m[n-2] + h[n-3] m[n-1]
//!     = (h[n-2]^2 delta[n-3] + (2 a + h[n-2]) h[n-3] delta[n-2]) / a,   a = h[n-3] + h[n-2]
//! ```


use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{interior_slope_rows, thomas_solve};
use crate::interpolation::spline::{CubicSpline, SplineKind};


#[derive(Debug, Copy, Clone, Default)]
pub struct NotAKnotSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NotAKnotSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NotAKnotSplineCfg<'a>);


/// Node slopes of the parabola through three points.
fn parabola_slopes(h: &[f64], delta: &[f64]) -> Vec<f64> {
    let f2 = (delta[1] - delta[0]) / (h[0] + h[1]);
    vec![
        delta[0] - f2 * h[0],
        delta[0] + f2 * h[0],
        delta[0] + f2 * (h[0] + 2.0 * h[1]),
    ]
}


pub(crate) fn slopes(h: &[f64], delta: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let n = h.len() + 1;
    match n {
        2 => return Ok(vec![delta[0], delta[0]]),
        3 => return Ok(parabola_slopes(h, delta)),
        _ => {}
    }

    let [mut sub, mut diag, mut sup, mut rhs] = interior_slope_rows(h, delta);

    let s0 = h[0] + h[1];
    diag[0] = h[1];
    sup[0]  = s0;
    rhs[0]  = ((h[0] + 2.0 * s0) * h[1] * delta[0] + h[0] * h[0] * delta[1]) / s0;

    let a  = h[n - 3] + h[n - 2];
    sub[n - 1]  = a;
    diag[n - 1] = h[n - 3];
    rhs[n - 1]  = (h[n - 2] * h[n - 2] * delta[n - 3]
        + (2.0 * a + h[n - 2]) * h[n - 3] * delta[n - 2]) / a;

    thomas_solve(&sub, &diag, &sup, &rhs)
}


/// Evaluates a not-a-knot cubic spline through the nodes of `cfg`.
pub fn interpolate(cfg: NotAKnotSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x = cfg.common.x();
    let spline = CubicSpline::from_validated(x, cfg.common.y(), SplineKind::NotAKnot)?;
    InterpolationReport::evaluate(spline.algorithm(), &spline, x.len(), cfg.common.x_eval())
}
