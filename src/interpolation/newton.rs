//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed recursively by divided differences and
//! evaluated at query points using Horner’s scheme for numerical stability.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_nodes, impl_common_cfg, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::{check_query, Interpolator};


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between consecutive `x` nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[inline]
fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}


/// Interpolating polynomial in Newton form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    x:      Vec<f64>,
    coeffs: Vec<f64>,
}

impl NewtonPolynomial {
    /// Builds the divided-difference table for nodes `(x, y)`.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        check_nodes(x, y, DEFAULT_X_TOL)?;
        Ok(Self { x: x.to_vec(), coeffs: divided_differences(x, y) })
    }

    /// Divided differences `f[x0], f[x0,x1], ..., f[x0..x_{n-1}]`.
    #[inline] #[must_use]
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
}

impl Interpolator for NewtonPolynomial {
    /// ```text
    /// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let n = self.coeffs.len();
        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (xq - self.x[j]) * p;
        }
        Ok(p)
    }

    /// Horner's scheme carried alongside its derivative.
    fn derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let n = self.coeffs.len();
        let mut p  = self.coeffs[n - 1];
        let mut dp = 0.0;
        for j in (0..n - 1).rev() {
            dp = p + (xq - self.x[j]) * dp;
            p  = self.coeffs[j] + (xq - self.x[j]) * p;
        }
        Ok(dp)
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - Evaluates each point of `cfg.common.x_eval()` by Horner's nested form.
/// - Points outside `[x[0], x[n-1]]` are extrapolated and flagged.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `extrapolated`   : per-point extrapolation flags
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let poly = NewtonPolynomial {
        x:      cfg.common.x().to_vec(),
        coeffs: divided_differences(cfg.common.x(), cfg.common.y()),
    };
    InterpolationReport::evaluate(Algorithm::Newton, &poly, cfg.common.x().len(), cfg.common.x_eval())
}
