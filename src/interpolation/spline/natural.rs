//! Natural Cubic Spline
//!
//! End conditions `S''(x[0]) = S''(x[n-1]) = 0`. In slope form the first and
//! last rows of the system read
//!
//! ```text
//! 2 m[0]   +   m[1]   = 3 delta[0]
//!   m[n-2] + 2 m[n-1] = 3 delta[n-2]
//! ```


use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{interior_slope_rows, thomas_solve};
use crate::interpolation::spline::{CubicSpline, SplineKind};


#[derive(Debug, Copy, Clone, Default)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NaturalSplineCfg<'a>);


pub(crate) fn slopes(h: &[f64], delta: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let n = h.len() + 1;
    let [mut sub, mut diag, mut sup, mut rhs] = interior_slope_rows(h, delta);

    diag[0] = 2.0;
    sup[0]  = 1.0;
    rhs[0]  = 3.0 * delta[0];

    sub[n - 1]  = 1.0;
    diag[n - 1] = 2.0;
    rhs[n - 1]  = 3.0 * delta[n - 2];

    thomas_solve(&sub, &diag, &sup, &rhs)
}


/// Evaluates a natural cubic spline through the nodes of `cfg`.
///
/// Points outside `[x[0], x[n-1]]` follow the end cubics and are flagged in
/// [`InterpolationReport::extrapolated`].
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x = cfg.common.x();
    let spline = CubicSpline::from_validated(x, cfg.common.y(), SplineKind::Natural)?;
    InterpolationReport::evaluate(spline.algorithm(), &spline, x.len(), cfg.common.x_eval())
}
