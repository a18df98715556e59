//! Chebyshev nodes.
//!
//! Roots of the degree-`n` Chebyshev polynomial of the first kind, mapped
//! from `[-1, 1]` onto `[a, b]`:
//!
//! ```text
//! r_k = -cos((2k + 1) π / (2n)),   x_k = ((b - a) r_k + a + b) / 2,   k = 0..n
//! ```
//!
//! Interpolating at these nodes keeps the Runge oscillation of high-degree
//! polynomials in check.

use std::f64::consts::PI;

use crate::interpolation::errors::InterpolationError;


/// `n` Chebyshev nodes on `[a, b]` in increasing order.
///
/// # Errors
/// - [`InterpolationError::InvalidNodeCount`] if `n == 0`.
/// - [`InterpolationError::InvalidInterval`] unless `a < b`, both finite.
pub fn chebyshev_nodes(n: usize, a: f64, b: f64) -> Result<Vec<f64>, InterpolationError> {
    if n == 0 {
        return Err(InterpolationError::InvalidNodeCount { got: n });
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(InterpolationError::InvalidInterval { a, b });
    }

    let nf = n as f64;
    Ok((0..n)
        .map(|k| {
            let r = -((2 * k + 1) as f64 * PI / (2.0 * nf)).cos();
            0.5 * ((b - a) * r + a + b)
        })
        .collect())
}
