//! Gauss–Legendre nodes and weights on `[-1, 1]`.
//!
//! Nodes are the roots of the Legendre polynomial `P_k`, found by Newton's
//! method from the asymptotic guess `cos(π (i + 3/4) / (k + 1/2))`:
//!
//! ```text
//! (j + 1) P_{j+1}(x) = (2j + 1) x P_j(x) - j P_{j-1}(x)
//! P_k'(x)            = k (x P_k(x) - P_{k-1}(x)) / (x^2 - 1)
//! w_i                = 2 / ((1 - x_i^2) P_k'(x_i)^2)
//! ```

use std::f64::consts::PI;

use crate::quadrature::errors::QuadratureError;


pub const MAX_GAUSS_POINTS: usize = 64;

const NEWTON_MAX_ITER: usize = 100;


/// `(P_k(x), P_k'(x))`
fn legendre(k: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p      = x;
    for j in 1..k {
        let jf = j as f64;
        let p_next = ((2.0 * jf + 1.0) * x * p - jf * p_prev) / (jf + 1.0);
        p_prev = p;
        p      = p_next;
    }
    let dp = k as f64 * (x * p - p_prev) / (x * x - 1.0);
    (p, dp)
}


/// Nodes (increasing) and weights of the `k`-point rule on `[-1, 1]`.
///
/// # Errors
/// [`QuadratureError::InvalidGaussPoints`] unless `1 <= k <= MAX_GAUSS_POINTS`.
pub fn nodes_and_weights(k: usize) -> Result<(Vec<f64>, Vec<f64>), QuadratureError> {
    if k == 0 || k > MAX_GAUSS_POINTS {
        return Err(QuadratureError::InvalidGaussPoints { got: k, max: MAX_GAUSS_POINTS });
    }

    let kf = k as f64;
    let mut nodes   = Vec::with_capacity(k);
    let mut weights = Vec::with_capacity(k);

    // guesses run from +1 down to -1
    for i in (0..k).rev() {
        let mut x = (PI * (i as f64 + 0.75) / (kf + 0.5)).cos();
        for _ in 0..NEWTON_MAX_ITER {
            let (p, dp) = legendre(k, x);
            let dx = p / dp;
            x -= dx;
            if dx.abs() <= 4.0 * f64::EPSILON {
                break;
            }
        }
        let (_, dp) = legendre(k, x);
        nodes.push(x);
        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
    }

    Ok((nodes, weights))
}
