//! Dense row-major matrices.
//!
//! [`Matrix`] stores `rows * cols` entries contiguously, row after row.
//! Every constructor enforces a constant row length, so a `Matrix` is never
//! ragged.

use std::ops::{Index, IndexMut};

use super::errors::DimensionError;
use super::vector::Vector;


#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    /// - [`DimensionError::Empty`]      : no rows, or an empty first row
    /// - [`DimensionError::RaggedRows`] : a row differs in length from the first
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, DimensionError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_rows == 0 || n_cols == 0 {
            return Err(DimensionError::Empty);
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != n_cols {
                return Err(DimensionError::RaggedRows { row, expected: n_cols, got: r.len() });
            }
            data.extend_from_slice(r);
        }

        Ok(Self { rows: n_rows, cols: n_cols, data })
    }

    /// Builds a matrix from row-major data.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, DimensionError> {
        if data.len() != rows * cols {
            return Err(DimensionError::DataLength { rows, cols, got: data.len() });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix whose `(i, j)` entry is `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    // shape
    #[inline] #[must_use] pub fn nrows(&self) -> usize { self.rows }
    #[inline] #[must_use] pub fn ncols(&self) -> usize { self.cols }
    #[inline] #[must_use] pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }
    #[inline] #[must_use] pub fn is_square(&self) -> bool { self.rows == self.cols }
    #[inline] #[must_use] pub fn as_slice(&self) -> &[f64] { &self.data }

    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[must_use]
    pub fn column(&self, j: usize) -> Vector {
        (0..self.rows).map(|i| self[(i, j)]).collect()
    }

    pub fn swap_rows(&mut self, i: usize, k: usize) {
        if i == k { return; }
        for j in 0..self.cols {
            self.data.swap(i * self.cols + j, k * self.cols + j);
        }
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)])
    }

    /// Matrix–vector product `A x`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vector, DimensionError> {
        if x.len() != self.cols {
            return Err(DimensionError::LengthMismatch { expected: self.cols, got: x.len() });
        }
        Ok((0..self.rows)
            .map(|i| self.row(i).iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Matrix–matrix product `A B`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, DimensionError> {
        if self.cols != rhs.rows {
            return Err(DimensionError::IncompatibleShapes {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self[(i, k)];
                if aik == 0.0 { continue; }
                for j in 0..rhs.cols {
                    out[(i, j)] += aik * rhs[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Maximum absolute column sum.
    #[must_use]
    pub fn norm1(&self) -> f64 {
        (0..self.cols)
            .map(|j| (0..self.rows).map(|i| self[(i, j)].abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    /// Maximum absolute row sum.
    #[must_use]
    pub fn norm_inf(&self) -> f64 {
        (0..self.rows)
            .map(|i| self.row(i).iter().map(|x| x.abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn norm_frobenius(&self) -> f64 {
        Vector::from_slice(&self.data).norm2()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}
