//! Gaussian elimination with partial pivoting.
//!
//! For every column `k` the row with the largest `|a[i][k]|`, `i >= k`, is
//! swapped into place, then eliminated from the rows below. The reduced
//! upper-triangular system is solved by backward substitution.

use crate::linear_system::config::PivotCfg;
use crate::linear_system::errors::LinearSystemError;
use crate::linear_system::report::{residual, SolveReport};
use crate::linear_system::substitution::solve_upper;
use crate::linear_system::validate;
use crate::primitives::Matrix;


const ALGORITHM_NAME: &str = "gaussian elimination";


/// Row index of the largest `|m[i][k]|` for `i` in `k..n`.
#[inline]
pub(crate) fn pivot_row(m: &Matrix, k: usize) -> usize {
    let mut p = k;
    for i in k + 1..m.nrows() {
        if m[(i, k)].abs() > m[(p, k)].abs() {
            p = i;
        }
    }
    p
}


/// Solves `A x = b` by elimination on a copy of `[A | b]`.
///
/// # Errors
/// - [`LinearSystemError::NotSquare`]         : `A` not square
/// - [`LinearSystemError::DimensionMismatch`] : `b.len() != n`
/// - [`LinearSystemError::NonFiniteEntry`]    : NaN/inf in `A` or `b`
/// - [`LinearSystemError::Singular`]          : pivot `<= pivot_tol · ||A||_∞`
pub fn gaussian_elimination(
    a: &Matrix,
    b: &[f64],
    cfg: PivotCfg,
) -> Result<SolveReport, LinearSystemError> {
    let n = validate::square(a)?;
    validate::rhs(n, b)?;

    let threshold = cfg.pivot_tol() * a.norm_inf();
    let mut m = a.clone();
    let mut x = b.to_vec();

    for k in 0..n {
        let p = pivot_row(&m, k);
        let pivot = m[(p, k)];
        if pivot.abs() <= threshold {
            return Err(LinearSystemError::Singular { column: k, pivot });
        }
        if p != k {
            tracing::trace!(column = k, from = p, "row swap");
            m.swap_rows(p, k);
            x.swap(p, k);
        }

        for i in k + 1..n {
            let factor = m[(i, k)] / pivot;
            if factor == 0.0 { continue; }
            m[(i, k)] = 0.0;
            for j in k + 1..n {
                let mkj = m[(k, j)];
                m[(i, j)] -= factor * mkj;
            }
            x[i] -= factor * x[k];
        }
    }

    solve_upper(&m, &mut x)?;

    let r = residual(a, &x, b).norm2();
    let report = SolveReport {
        solution:         x.into(),
        residual_norm:    r,
        residual_history: vec![r],
        refinement_steps: 0,
        algorithm_name:   ALGORITHM_NAME,
    };
    report.log();
    Ok(report)
}
