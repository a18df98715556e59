//! Householder QR factorization of a tall matrix `X (m x n)`, `m >= n`.
//!
//! Column `k` is reflected onto `alpha e_k` with
//! `H_k = I - 2 v vᵀ / (vᵀ v)`, `v = x - alpha e_k`,
//! `alpha = -sign(x_k) ||x||` to avoid cancellation. Then
//! `Qᵀ X = H_{n-1} ... H_0 X = [R; 0]`.

use crate::least_squares::errors::LeastSquaresError;
use crate::least_squares::fit::check_design;
use crate::primitives::{Matrix, Vector};


/// Reflector `v` acting on rows `k..m`, with `vᵀ v`; `None` for identity.
type Reflector = Option<(Vec<f64>, f64)>;


#[derive(Debug, Clone, PartialEq)]
pub struct HouseholderQr {
    reduced:    Matrix,
    reflectors: Vec<Reflector>,
}

impl HouseholderQr {
    pub fn new(x: &Matrix) -> Result<Self, LeastSquaresError> {
        let (m, n) = check_design(x)?;
        let mut a = x.clone();
        let mut reflectors = Vec::with_capacity(n);

        for k in 0..n {
            let norm = (k..m).map(|i| a[(i, k)] * a[(i, k)]).sum::<f64>().sqrt();
            if norm == 0.0 {
                reflectors.push(None);
                continue;
            }

            let alpha = -norm.copysign(a[(k, k)]);
            let mut v = (k..m).map(|i| a[(i, k)]).collect::<Vec<_>>();
            v[0] -= alpha;
            let vtv = v.iter().map(|vi| vi * vi).sum::<f64>();
            if vtv == 0.0 {
                reflectors.push(None);
                continue;
            }

            for j in k + 1..n {
                let s = v.iter().enumerate().map(|(i, vi)| vi * a[(k + i, j)]).sum::<f64>();
                let scale = 2.0 * s / vtv;
                for (i, vi) in v.iter().enumerate() {
                    a[(k + i, j)] -= scale * vi;
                }
            }
            a[(k, k)] = alpha;
            for i in k + 1..m {
                a[(i, k)] = 0.0;
            }
            reflectors.push(Some((v, vtv)));
        }

        Ok(Self { reduced: a, reflectors })
    }

    #[inline] #[must_use]
    pub fn nrows(&self) -> usize { self.reduced.nrows() }

    #[inline] #[must_use]
    pub fn ncols(&self) -> usize { self.reduced.ncols() }

    /// Upper-triangular `R (n x n)`.
    #[must_use]
    pub fn r(&self) -> Matrix {
        let n = self.ncols();
        Matrix::from_fn(n, n, |i, j| if i <= j { self.reduced[(i, j)] } else { 0.0 })
    }

    /// `Qᵀ b`.
    pub fn apply_qt(&self, b: &[f64]) -> Result<Vector, LeastSquaresError> {
        if b.len() != self.nrows() {
            return Err(LeastSquaresError::DimensionMismatch { expected: self.nrows(), got: b.len() });
        }
        let mut out = b.to_vec();
        for (k, h) in self.reflectors.iter().enumerate() {
            reflect(h, &mut out[k..]);
        }
        Ok(Vector::new(out))
    }

    /// Thin `Q (m x n)` with orthonormal columns.
    #[must_use]
    pub fn q(&self) -> Matrix {
        let (m, n) = (self.nrows(), self.ncols());
        let mut q = Matrix::zeros(m, n);
        for j in 0..n {
            let mut col = Vector::unit(m, j).into_inner();
            for (k, h) in self.reflectors.iter().enumerate().rev() {
                reflect(h, &mut col[k..]);
            }
            for (i, c) in col.into_iter().enumerate() {
                q[(i, j)] = c;
            }
        }
        q
    }
}


fn reflect(h: &Reflector, x: &mut [f64]) {
    if let Some((v, vtv)) = h {
        let scale = 2.0 * v.iter().zip(x.iter()).map(|(vi, xi)| vi * xi).sum::<f64>() / vtv;
        for (xi, vi) in x.iter_mut().zip(v) {
            *xi -= scale * vi;
        }
    }
}
