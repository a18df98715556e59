use crate::linear_system::errors::LinearSystemError;
use crate::primitives::Matrix;


/// Order of a square, finite, non-empty `a`.
pub(crate) fn square(a: &Matrix) -> Result<usize, LinearSystemError> {
    let (rows, cols) = a.shape();
    if rows == 0 || cols == 0 {
        return Err(LinearSystemError::Empty);
    }
    if rows != cols {
        return Err(LinearSystemError::NotSquare { rows, cols });
    }
    if let Some(k) = a.as_slice().iter().position(|v| !v.is_finite()) {
        return Err(LinearSystemError::NonFiniteEntry { row: k / cols, col: k % cols });
    }
    Ok(rows)
}


pub(crate) fn rhs(n: usize, b: &[f64]) -> Result<(), LinearSystemError> {
    if b.len() != n {
        return Err(LinearSystemError::DimensionMismatch { expected: n, got: b.len() });
    }
    if let Some(k) = b.iter().position(|v| !v.is_finite()) {
        return Err(LinearSystemError::NonFiniteEntry { row: k, col: 0 });
    }
    Ok(())
}
