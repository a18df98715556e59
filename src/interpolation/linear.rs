//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment. Evaluation points lying within `[x[i], x[i+1]]`
//! are interpolated linearly between the two end points; points beyond
//! the ends follow the first or last segment.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_nodes, impl_common_cfg, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::find_interval;
use crate::interpolation::traits::{check_query, Interpolator};


/// Linear interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LinearCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LinearCfg<'a>);


#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}


/// Piecewise-linear interpolant.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PiecewiseLinear {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        check_nodes(x, y, DEFAULT_X_TOL)?;
        Ok(Self { x: x.to_vec(), y: y.to_vec() })
    }
}

impl Interpolator for PiecewiseLinear {
    /// ```text
    /// yq = y[i] + (y[i+1] - y[i]) * (xq - x[i]) / (x[i+1] - x[i])
    /// ```
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let i = find_interval(&self.x, xq);
        Ok(lerp(self.x[i], self.x[i + 1], self.y[i], self.y[i + 1], xq))
    }

    /// Slope of the segment containing `xq`; nodes take the right segment
    /// except the last one.
    fn derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let i = find_interval(&self.x, xq);
        Ok((self.y[i + 1] - self.y[i]) / (self.x[i + 1] - self.x[i]))
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}


/// Performs linear interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"linear"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated y-values
/// - `extrapolated`   : per-point extrapolation flags
pub fn interpolate(cfg: LinearCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let interp = PiecewiseLinear {
        x: cfg.common.x().to_vec(),
        y: cfg.common.y().to_vec(),
    };
    InterpolationReport::evaluate(Algorithm::Linear, &interp, cfg.common.x().len(), cfg.common.x_eval())
}
