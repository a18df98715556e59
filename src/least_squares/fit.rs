//! Least-squares driver.

use crate::least_squares::algorithms::Method;
use crate::least_squares::config::FitCfg;
use crate::least_squares::errors::LeastSquaresError;
use crate::least_squares::householder::HouseholderQr;
use crate::least_squares::jacobi::singular_values;
use crate::least_squares::normal_equations::cholesky;
use crate::least_squares::report::FitReport;
use crate::linear_system::{backward_substitution, forward_substitution};
use crate::primitives::{Matrix, Vector};


/// Shape `(m, n)` of a finite design matrix with `m >= n >= 1`.
pub(crate) fn check_design(x: &Matrix) -> Result<(usize, usize), LeastSquaresError> {
    let (rows, cols) = x.shape();
    if rows == 0 || cols == 0 {
        return Err(LeastSquaresError::Empty);
    }
    if rows < cols {
        return Err(LeastSquaresError::TooFewObservations { rows, cols });
    }
    if let Some(k) = x.as_slice().iter().position(|v| !v.is_finite()) {
        return Err(LeastSquaresError::NonFiniteEntry { row: k / cols, col: k % cols });
    }
    Ok((rows, cols))
}


/// `|r_kk| <= rank_tol · max_i |r_ii|` for some `k` is rank deficiency.
fn check_rank(r: &Matrix, rank_tol: f64) -> Result<(), LeastSquaresError> {
    let n = r.ncols();
    let largest = (0..n).map(|i| r[(i, i)].abs()).fold(0.0, f64::max);
    for k in 0..n {
        let pivot = r[(k, k)].abs();
        if pivot <= rank_tol * largest {
            return Err(LeastSquaresError::RankDeficient { column: k, pivot });
        }
    }
    Ok(())
}


/// Fits `β` minimizing `||X β - y||_2`.
///
/// # Errors
/// - [`LeastSquaresError::TooFewObservations`] : fewer rows than columns
/// - [`LeastSquaresError::DimensionMismatch`]  : `y.len() != rows`
/// - [`LeastSquaresError::NonFiniteEntry`]     : NaN/inf in `X` or `y`
/// - [`LeastSquaresError::RankDeficient`]      : dependent columns
pub fn fit(x: &Matrix, y: &[f64], cfg: FitCfg) -> Result<FitReport, LeastSquaresError> {
    let (m, n) = check_design(x)?;
    if y.len() != m {
        return Err(LeastSquaresError::DimensionMismatch { expected: m, got: y.len() });
    }
    if let Some(k) = y.iter().position(|v| !v.is_finite()) {
        return Err(LeastSquaresError::NonFiniteEntry { row: k, col: 0 });
    }

    let (r, coefficients) = match cfg.method() {
        Method::Qr => {
            let qr = HouseholderQr::new(x)?;
            let r = qr.r();
            check_rank(&r, cfg.rank_tol())?;
            let z = qr.apply_qt(y)?;
            let beta = backward_substitution(&r, &z[..n])?;
            (r, beta)
        }
        Method::NormalEquations => {
            let xt = x.transpose();
            let r = cholesky(&xt.matmul(x)?)?;
            check_rank(&r, cfg.rank_tol())?;
            let z = forward_substitution(&r.transpose(), &xt.mul_vec(y)?)?;
            let beta = backward_substitution(&r, &z)?;
            (r, beta)
        }
    };

    let sigma = singular_values(&r);
    let condition_number = match sigma[n - 1] {
        s if s > 0.0 => sigma[0] / s,
        _ => f64::INFINITY,
    };
    let fitted = x.mul_vec(&coefficients)?;
    let residual_norm = y.iter().zip(fitted.iter()).map(|(yi, fi)| yi - fi).collect::<Vector>().norm2();

    tracing::debug!(
        method = cfg.method().method_name(),
        observations = m,
        coefficients = n,
        residual_norm,
        condition_number,
        "least squares fit finished"
    );
    if condition_number > 1.0 / f64::EPSILON.sqrt() {
        tracing::warn!(condition_number, "ill-conditioned design matrix");
    }

    Ok(FitReport {
        coefficients,
        residual_norm,
        singular_values: Vector::new(sigma),
        condition_number,
        method_name: cfg.method().method_name(),
    })
}
