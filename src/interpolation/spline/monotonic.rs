//! Monotonic Cubic Spline
//!
//! Shape-preserving piecewise cubic Hermite interpolation (PCHIP) with
//! Fritsch–Carlson slopes:
//!
//! ┌ interior  : weighted harmonic mean of adjacent secants, `0` at a local extremum
//! └ endpoints : one-sided three-point estimate, limited to `3 |delta|`
//!
//! The interpolant is C¹ and never overshoots monotone data.


use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::{CubicSpline, SplineKind};


#[derive(Debug, Copy, Clone, Default)]
pub struct MonotonicSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> MonotonicSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(MonotonicSplineCfg<'a>);


#[inline]
fn endpoint_slope(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    if d0 == 0.0 || d0.signum() * d1.signum() <= 0.0 { return 0.0; }

    let m = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if m.signum() * d0.signum() <= 0.0 { 0.0 }
    else if m.abs() > 3.0 * d0.abs() { 3.0 * d0 }
    else { m }
}


#[inline]
fn interior_slopes(h: &[f64], d: &[f64]) -> Vec<f64> {
    let n = d.len() + 1;
    let mut m = vec![0.0; n];

    for i in 1..n - 1 {
        let d0 = d[i - 1];
        let d1 = d[i];

        if d0.signum() * d1.signum() <= 0.0 || d0 == 0.0 || d1 == 0.0 {
            m[i] = 0.0;
        } else {
            let w0 = 2.0 * h[i] + h[i - 1];
            let w1 = h[i] + 2.0 * h[i - 1];
            m[i]   = (w0 + w1) / (w0 / d0 + w1 / d1);
        }
    }
    m
}


pub(crate) fn slopes(h: &[f64], d: &[f64]) -> Vec<f64> {
    let n = h.len() + 1;
    if n == 2 {
        return vec![d[0], d[0]];
    }

    let mut m = interior_slopes(h, d);
    m[0]      = endpoint_slope(h[0], h[1], d[0], d[1]);
    // mirrored: the last piece plays the role of the first
    m[n - 1]  = endpoint_slope(h[n - 2], h[n - 3], d[n - 2], d[n - 3]);
    m
}


/// Evaluates a monotonic cubic spline (PCHIP / Fritsch–Carlson).
pub fn interpolate(cfg: MonotonicSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x = cfg.common.x();
    let spline = CubicSpline::from_validated(x, cfg.common.y(), SplineKind::Monotonic)?;
    InterpolationReport::evaluate(spline.algorithm(), &spline, x.len(), cfg.common.x_eval())
}
