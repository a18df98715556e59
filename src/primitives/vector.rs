//! Owned real vectors with value semantics.
//!
//! [`Vector`] wraps a `Vec<f64>` and dereferences to `[f64]`, so slices
//! methods (`len`, `iter`, indexing) are available directly. Cloning is the
//! only way to share data between solver calls, which rules out aliasing.
//!
//! Arithmetic operators panic on length mismatch, like slice indexing does;
//! solvers validate dimensions before they reach them.

use std::ops::{Add, Deref, DerefMut, Mul, Neg, Sub};

use super::errors::DimensionError;


#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self { Self { data } }

    #[must_use]
    pub fn zeros(n: usize) -> Self { Self { data: vec![0.0; n] } }

    #[must_use]
    pub fn from_slice(xs: &[f64]) -> Self { Self { data: xs.to_vec() } }

    /// `i`-th canonical basis vector of length `n`.
    #[must_use]
    pub fn unit(n: usize, i: usize) -> Self {
        let mut v = Self::zeros(n);
        v.data[i] = 1.0;
        v
    }

    #[inline] #[must_use] pub fn as_slice(&self) -> &[f64] { &self.data }
    #[inline] #[must_use] pub fn into_inner(self) -> Vec<f64> { self.data }

    /// Checks that `other` has the same length as `self`.
    pub fn check_len(&self, other: &[f64]) -> Result<(), DimensionError> {
        if self.len() != other.len() {
            return Err(DimensionError::LengthMismatch { expected: self.len(), got: other.len() });
        }
        Ok(())
    }

    pub fn dot(&self, other: &[f64]) -> Result<f64, DimensionError> {
        self.check_len(other)?;
        Ok(self.data.iter().zip(other).map(|(a, b)| a * b).sum())
    }

    /// `self += alpha * x`
    pub fn axpy(&mut self, alpha: f64, x: &[f64]) -> Result<(), DimensionError> {
        self.check_len(x)?;
        for (yi, xi) in self.data.iter_mut().zip(x) {
            *yi += alpha * xi;
        }
        Ok(())
    }

    #[must_use]
    pub fn scaled(&self, alpha: f64) -> Self {
        self.data.iter().map(|x| alpha * x).collect()
    }

    /// Sum of absolute values.
    #[must_use]
    pub fn norm1(&self) -> f64 {
        self.data.iter().map(|x| x.abs()).sum()
    }

    /// Euclidean norm, scaled by the largest entry to avoid overflow.
    #[must_use]
    pub fn norm2(&self) -> f64 {
        let scale = self.norm_inf();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let ssq: f64 = self.data.iter().map(|x| (x / scale).powi(2)).sum();
        scale * ssq.sqrt()
    }

    /// Largest absolute entry.
    #[must_use]
    pub fn norm_inf(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl Deref for Vector {
    type Target = [f64];
    fn deref(&self) -> &[f64] { &self.data }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut [f64] { &mut self.data }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self { Self { data } }
}

impl From<&[f64]> for Vector {
    fn from(xs: &[f64]) -> Self { Self::from_slice(xs) }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(xs: [f64; N]) -> Self { Self { data: xs.to_vec() } }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter { self.data.iter() }
}


#[inline]
fn zip_with(lhs: &[f64], rhs: &[f64], op: impl Fn(f64, f64) -> f64) -> Vector {
    assert_eq!(lhs.len(), rhs.len(), "vector length mismatch");
    lhs.iter().zip(rhs).map(|(&a, &b)| op(a, b)).collect()
}

impl Add<&Vector> for &Vector {
    type Output = Vector;
    fn add(self, rhs: &Vector) -> Vector { zip_with(self, rhs, |a, b| a + b) }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;
    fn sub(self, rhs: &Vector) -> Vector { zip_with(self, rhs, |a, b| a - b) }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector { &self + &rhs }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector { &self - &rhs }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, alpha: f64) -> Vector { self.scaled(alpha) }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, alpha: f64) -> Vector { self.scaled(alpha) }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;
    fn mul(self, v: &Vector) -> Vector { v.scaled(self) }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector { self.scaled(-1.0) }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector { self.scaled(-1.0) }
}
