//! Clamped Cubic Spline
//!
//! End slopes `S'(x[0]) = slope_start` and `S'(x[n-1]) = slope_final` are
//! prescribed, which pins the first and last unknowns of the slope system.


use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{interior_slope_rows, thomas_solve};
use crate::interpolation::spline::{CubicSpline, SplineKind};


/// Clamped spline configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]
/// - `slope_start` : `S'(x[0])`
/// - `slope_final` : `S'(x[n-1])`
#[derive(Debug, Copy, Clone)]
pub struct ClampedSplineCfg<'a> {
    common: CommonCfg<'a>,
    slope_start: f64,
    slope_final: f64,
}
impl<'a> ClampedSplineCfg<'a> {
    pub fn new(slope_start: f64, slope_final: f64) -> Self {
        Self { common: CommonCfg::new(), slope_start, slope_final }
    }

    pub fn slope_start(&self) -> f64 { self.slope_start }
    pub fn slope_final(&self) -> f64 { self.slope_final }

    pub fn set_slope_start(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteSlope { got: v });
        }
        self.slope_start = v;
        Ok(self)
    }

    pub fn set_slope_final(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteSlope { got: v });
        }
        self.slope_final = v;
        Ok(self)
    }
}
impl_common_cfg!(ClampedSplineCfg<'a>);


pub(crate) fn slopes(
    h: &[f64],
    delta: &[f64],
    slope_start: f64,
    slope_final: f64,
) -> Result<Vec<f64>, InterpolationError> {
    let n = h.len() + 1;
    let [mut sub, mut diag, mut sup, mut rhs] = interior_slope_rows(h, delta);

    diag[0] = 1.0;
    sup[0]  = 0.0;
    rhs[0]  = slope_start;

    sub[n - 1]  = 0.0;
    diag[n - 1] = 1.0;
    rhs[n - 1]  = slope_final;

    thomas_solve(&sub, &diag, &sup, &rhs)
}


/// Evaluates a clamped cubic spline through the nodes of `cfg`.
pub fn interpolate(cfg: ClampedSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x    = cfg.common.x();
    let kind = SplineKind::Clamped {
        slope_start: cfg.slope_start,
        slope_final: cfg.slope_final,
    };
    let spline = CubicSpline::from_validated(x, cfg.common.y(), kind)?;
    InterpolationReport::evaluate(spline.algorithm(), &spline, x.len(), cfg.common.x_eval())
}
