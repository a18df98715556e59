//! LU factorization with partial pivoting, `P A = L U`.
//!
//! `L` (unit lower) and `U` (upper) share one packed matrix; the row
//! permutation is stored as `perm[i]` = row of `A` found at row `i` of
//! `P A`. Every solve reuses the factorization at `O(n^2)` cost.

use crate::linear_system::config::PivotCfg;
use crate::linear_system::errors::LinearSystemError;
use crate::linear_system::gaussian_elimination::pivot_row;
use crate::linear_system::substitution::{solve_lower, solve_upper};
use crate::linear_system::validate;
use crate::primitives::{Matrix, Vector};


#[derive(Debug, Clone, PartialEq)]
pub struct LuFactorization {
    lu:   Matrix,
    perm: Vec<usize>,
    sign: f64,
}

impl LuFactorization {
    /// Factors `a`.
    ///
    /// # Errors
    /// - [`LinearSystemError::NotSquare`], [`LinearSystemError::Empty`],
    ///   [`LinearSystemError::NonFiniteEntry`]
    /// - [`LinearSystemError::Singular`] : pivot `<= pivot_tol · ||A||_∞`
    pub fn new(a: &Matrix, cfg: PivotCfg) -> Result<Self, LinearSystemError> {
        let n = validate::square(a)?;
        let threshold = cfg.pivot_tol() * a.norm_inf();

        let mut lu   = a.clone();
        let mut perm = (0..n).collect::<Vec<_>>();
        let mut sign = 1.0;

        for k in 0..n {
            let p = pivot_row(&lu, k);
            let pivot = lu[(p, k)];
            if pivot.abs() <= threshold {
                return Err(LinearSystemError::Singular { column: k, pivot });
            }
            if p != k {
                lu.swap_rows(p, k);
                perm.swap(p, k);
                sign = -sign;
            }

            for i in k + 1..n {
                let factor = lu[(i, k)] / pivot;
                lu[(i, k)] = factor;
                if factor == 0.0 { continue; }
                for j in k + 1..n {
                    let ukj = lu[(k, j)];
                    lu[(i, j)] -= factor * ukj;
                }
            }
        }

        let determinant_sign = sign;
        tracing::debug!(n, determinant_sign, "lu factorization finished");
        Ok(Self { lu, perm, sign })
    }

    #[inline] #[must_use]
    pub fn dim(&self) -> usize { self.perm.len() }

    /// Row permutation: row `i` of `P A` is row `perm[i]` of `A`.
    #[inline] #[must_use]
    pub fn permutation(&self) -> &[usize] { &self.perm }

    /// Unit lower-triangular factor.
    #[must_use]
    pub fn l(&self) -> Matrix {
        Matrix::from_fn(self.dim(), self.dim(), |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[(i, j)],
            std::cmp::Ordering::Equal   => 1.0,
            std::cmp::Ordering::Less    => 0.0,
        })
    }

    /// Upper-triangular factor.
    #[must_use]
    pub fn u(&self) -> Matrix {
        Matrix::from_fn(self.dim(), self.dim(), |i, j| if i <= j { self.lu[(i, j)] } else { 0.0 })
    }

    /// `det(A) = ±Π U[i][i]`, sign from the permutation parity.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        (0..self.dim()).fold(self.sign, |d, i| d * self.lu[(i, i)])
    }

    /// Solves `A x = b`.
    pub fn solve(&self, b: &[f64]) -> Result<Vector, LinearSystemError> {
        validate::rhs(self.dim(), b)?;
        let mut x = self.perm.iter().map(|&p| b[p]).collect::<Vec<_>>();
        solve_lower(&self.lu, &mut x, true)?;
        solve_upper(&self.lu, &mut x)?;
        Ok(Vector::new(x))
    }

    /// Solves `A X = B` column by column.
    pub fn solve_many(&self, b: &Matrix) -> Result<Matrix, LinearSystemError> {
        if b.nrows() != self.dim() {
            return Err(LinearSystemError::DimensionMismatch { expected: self.dim(), got: b.nrows() });
        }
        let mut out = Matrix::zeros(b.nrows(), b.ncols());
        for j in 0..b.ncols() {
            let x = self.solve(&b.column(j))?;
            for (i, xi) in x.iter().enumerate() {
                out[(i, j)] = *xi;
            }
        }
        Ok(out)
    }

    /// `A^{-1}`, by solving against the identity.
    pub fn inverse(&self) -> Result<Matrix, LinearSystemError> {
        self.solve_many(&Matrix::identity(self.dim()))
    }
}
