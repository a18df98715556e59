//! Polynomial fitting through the Vandermonde design matrix.
//!
//! Coefficients are ordered from the highest power down:
//! `p(u) = c[0] u^d + c[1] u^{d-1} + ... + c[d]`.

use crate::least_squares::config::FitCfg;
use crate::least_squares::errors::LeastSquaresError;
use crate::least_squares::fit::fit;
use crate::least_squares::report::FitReport;
use crate::primitives::{Matrix, Vector};


/// `V[i][j] = t[i]^(degree - j)`, shape `t.len() x (degree + 1)`.
#[must_use]
pub fn vandermonde(t: &[f64], degree: usize) -> Matrix {
    let n = degree + 1;
    let mut v = Matrix::zeros(t.len(), n);
    for (i, &ti) in t.iter().enumerate() {
        let mut p = 1.0;
        for j in (0..n).rev() {
            v[(i, j)] = p;
            p *= ti;
        }
    }
    v
}


/// Least-squares polynomial of the given degree through `(t, y)`.
///
/// Needs at least `degree + 1` samples.
pub fn polynomial_fit(
    t: &[f64],
    y: &[f64],
    degree: usize,
    cfg: FitCfg,
) -> Result<FitReport, LeastSquaresError> {
    fit(&vandermonde(t, degree), y, cfg)
}


/// Evaluates the polynomial at every point of `u` by Horner's scheme.
#[must_use]
pub fn polynomial_value(coeffs: &[f64], u: &[f64]) -> Vector {
    u.iter()
        .map(|&ui| coeffs.iter().fold(0.0, |acc, c| acc * ui + c))
        .collect()
}
