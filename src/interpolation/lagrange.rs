//! Lagrange Interpolation
//!
//! Global polynomial interpolation in the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(x) = sum_j y[j] L_j(x),   L_j(x) = prod_{k != j} (x - x[k]) / (x[j] - x[k])
//! ```
//!
//! The basis is rebuilt at every query, `O(n^2)` per point. The same
//! polynomial in Newton form ([`crate::interpolation::newton`]) is cheaper to
//! evaluate; both agree up to round-off.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_nodes, impl_common_cfg, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::{check_query, Interpolator};


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Interpolating polynomial in Lagrange form.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LagrangePolynomial {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        check_nodes(x, y, DEFAULT_X_TOL)?;
        Ok(Self { x: x.to_vec(), y: y.to_vec() })
    }

    /// `L_j(xq)`
    #[inline]
    fn basis(&self, j: usize, xq: f64) -> f64 {
        let xj = self.x[j];
        self.x
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != j)
            .fold(1.0, |acc, (_, &xk)| acc * (xq - xk) / (xj - xk))
    }

    /// `L_j'(xq) = sum_{m != j} 1/(x[j] - x[m]) prod_{k != j, m} (xq - x[k]) / (x[j] - x[k])`
    fn basis_derivative(&self, j: usize, xq: f64) -> f64 {
        let xj = self.x[j];
        let n  = self.x.len();
        let mut sum = 0.0;
        for m in (0..n).filter(|&m| m != j) {
            let mut term = 1.0 / (xj - self.x[m]);
            for k in (0..n).filter(|&k| k != j && k != m) {
                term *= (xq - self.x[k]) / (xj - self.x[k]);
            }
            sum += term;
        }
        sum
    }
}

impl Interpolator for LagrangePolynomial {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        Ok((0..self.x.len()).map(|j| self.y[j] * self.basis(j, xq)).sum())
    }

    fn derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        Ok((0..self.x.len()).map(|j| self.y[j] * self.basis_derivative(j, xq)).sum())
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name` `"lagrange"`; points outside
/// `[x[0], x[n-1]]` are extrapolated and flagged.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let poly = LagrangePolynomial {
        x: cfg.common.x().to_vec(),
        y: cfg.common.y().to_vec(),
    };
    InterpolationReport::evaluate(Algorithm::Lagrange, &poly, cfg.common.x().len(), cfg.common.x_eval())
}
