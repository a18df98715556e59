//! Triangular solves.
//!
//! ```text
//! forward  : x[i] = (b[i] - Σ_{j<i} L[i][j] x[j]) / L[i][i]
//! backward : x[i] = (b[i] - Σ_{j>i} U[i][j] x[j]) / U[i][i]
//! ```
//!
//! Only the relevant triangle is read, so the packed `L\U` storage of
//! [`LuFactorization`](crate::linear_system::LuFactorization) can be passed
//! as is.

use crate::linear_system::errors::LinearSystemError;
use crate::linear_system::validate;
use crate::primitives::{Matrix, Vector};


/// In-place forward substitution; `unit` assumes `L[i][i] = 1`.
pub(crate) fn solve_lower(l: &Matrix, x: &mut [f64], unit: bool) -> Result<(), LinearSystemError> {
    for i in 0..x.len() {
        let row = l.row(i);
        let s: f64 = row[..i].iter().zip(&x[..i]).map(|(lij, xj)| lij * xj).sum();
        x[i] -= s;
        if !unit {
            if row[i] == 0.0 {
                return Err(LinearSystemError::Singular { column: i, pivot: 0.0 });
            }
            x[i] /= row[i];
        }
    }
    Ok(())
}


/// In-place backward substitution.
pub(crate) fn solve_upper(u: &Matrix, x: &mut [f64]) -> Result<(), LinearSystemError> {
    let n = x.len();
    for i in (0..n).rev() {
        let row = u.row(i);
        let s: f64 = row[i + 1..].iter().zip(&x[i + 1..]).map(|(uij, xj)| uij * xj).sum();
        if row[i] == 0.0 {
            return Err(LinearSystemError::Singular { column: i, pivot: 0.0 });
        }
        x[i] = (x[i] - s) / row[i];
    }
    Ok(())
}


/// Solves `L x = b` for lower-triangular `L`; entries above the diagonal
/// are ignored.
///
/// # Errors
/// - [`LinearSystemError::NotSquare`], [`LinearSystemError::DimensionMismatch`]
/// - [`LinearSystemError::Singular`] : zero on the diagonal
pub fn forward_substitution(l: &Matrix, b: &[f64]) -> Result<Vector, LinearSystemError> {
    let n = validate::square(l)?;
    validate::rhs(n, b)?;
    let mut x = b.to_vec();
    solve_lower(l, &mut x, false)?;
    Ok(Vector::new(x))
}


/// Solves `U x = b` for upper-triangular `U`; entries below the diagonal
/// are ignored.
pub fn backward_substitution(u: &Matrix, b: &[f64]) -> Result<Vector, LinearSystemError> {
    let n = validate::square(u)?;
    validate::rhs(n, b)?;
    let mut x = b.to_vec();
    solve_upper(u, &mut x)?;
    Ok(Vector::new(x))
}
