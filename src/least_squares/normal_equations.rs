//! Cholesky factorization `G = Rᵀ R` of a symmetric positive definite `G`.
//!
//! ```text
//! r_jj = sqrt(g_jj - Σ_{k<j} r_kj²)
//! r_ji = (g_ji - Σ_{k<j} r_kj r_ki) / r_jj,   i > j
//! ```
//!
//! Used on `G = XᵀX`, whose condition number is `κ₂(X)²`.

use crate::least_squares::errors::LeastSquaresError;
use crate::linear_system::LinearSystemError;
use crate::primitives::Matrix;


/// Upper-triangular Cholesky factor `R`; only the upper triangle of `g`
/// is read.
///
/// # Errors
/// - [`LeastSquaresError::RankDeficient`] : `g` not positive definite in
///   working precision
pub fn cholesky(g: &Matrix) -> Result<Matrix, LeastSquaresError> {
    let (rows, cols) = g.shape();
    if rows != cols {
        return Err(LinearSystemError::NotSquare { rows, cols }.into());
    }
    let n = rows;
    let mut r = Matrix::zeros(n, n);

    for j in 0..n {
        let d = g[(j, j)] - (0..j).map(|k| r[(k, j)] * r[(k, j)]).sum::<f64>();
        if d <= 0.0 || !d.is_finite() {
            return Err(LeastSquaresError::RankDeficient { column: j, pivot: d.max(0.0).sqrt() });
        }
        let rjj = d.sqrt();
        r[(j, j)] = rjj;
        for i in j + 1..n {
            let s = (0..j).map(|k| r[(k, j)] * r[(k, i)]).sum::<f64>();
            r[(j, i)] = (g[(j, i)] - s) / rjj;
        }
    }
    Ok(r)
}
