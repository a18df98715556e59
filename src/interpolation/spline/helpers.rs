use crate::interpolation::errors::InterpolationError;


/// Spacings `h[i] = x[i+1] - x[i]` between adjacent nodes
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Secant slopes `delta[i] = (y[i+1] - y[i]) / h[i]`
pub(crate) fn deltas(y: &[f64], h: &[f64]) -> Vec<f64> {
    y.windows(2).zip(h).map(|(w, &hi)| (w[1] - w[0]) / hi).collect()
}


/// Index `lo` of the piece used for `xq`, so that `x[lo] <= xq < x[lo+1]`.
///
/// Clamped to `0..=n-2`: points left of `x[0]` use the first piece, points
/// at or right of `x[n-1]` use the last.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}


/// Solves a tridiagonal system with the Thomas algorithm.
///
/// - `sub`  : sub-diagonal, `sub[0]` unused
/// - `diag` : main diagonal
/// - `sup`  : super-diagonal, `sup[n-1]` unused
/// - `rhs`  : right-hand side
///
/// No pivoting; a zero or non-finite pivot is reported as
/// [`InterpolationError::SingularSystem`].
pub(crate) fn thomas_solve(
    sub : &[f64],
    diag: &[f64],
    sup : &[f64],
    rhs : &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    let n = rhs.len();
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // forward sweep
    let mut den = diag[0];
    for i in 0..n {
        if i > 0 {
            den = diag[i] - sub[i] * c_prime[i - 1];
        }
        if den == 0.0 || !den.is_finite() {
            return Err(InterpolationError::SingularSystem { row: i });
        }
        if i + 1 < n {
            c_prime[i] = sup[i] / den;
        }
        let prev = if i > 0 { sub[i] * d_prime[i - 1] } else { 0.0 };
        d_prime[i] = (rhs[i] - prev) / den;
    }

    // back substitution
    let mut x = d_prime;
    for i in (0..n.saturating_sub(1)).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }

    Ok(x)
}


/// Interior rows shared by the natural, not-a-knot and clamped slope systems:
///
/// ```text
/// h[i] d[i-1] + 2 (h[i-1] + h[i]) d[i] + h[i-1] d[i+1] = 3 (h[i] delta[i-1] + h[i-1] delta[i])
/// ```
///
/// Returns `(sub, diag, sup, rhs)` of length `n = h.len() + 1` with the
/// first and last rows left at zero.
pub(crate) fn interior_slope_rows(h: &[f64], delta: &[f64]) -> [Vec<f64>; 4] {
    let n = h.len() + 1;
    let mut sub  = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut sup  = vec![0.0; n];
    let mut rhs  = vec![0.0; n];

    for i in 1..n - 1 {
        sub[i]  = h[i];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        sup[i]  = h[i - 1];
        rhs[i]  = 3.0 * (h[i] * delta[i - 1] + h[i - 1] * delta[i]);
    }

    [sub, diag, sup, rhs]
}
