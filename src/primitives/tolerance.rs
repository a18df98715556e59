//! Tolerance and iteration-budget record shared by iterative solvers.
//!
//! [`Tolerance`]
//! ├ `abs_tol`  : absolute tolerance on the step / width
//! ├ `rel_tol`  : relative tolerance, scaled by the current iterate
//! └ `max_iter` : iteration cap; `None` lets the algorithm pick its default
//!
//! The stopping rule is the mixed criterion
//!
//! ```text
//! |x_{k+1} - x_k| <= abs_tol + rel_tol * |x_{k+1}|
//! ```
//!
//! Defaults are public so callers can rely on them.

use super::errors::ToleranceError;
use super::float::mixed_tolerance;


pub const DEFAULT_ABS_TOL: f64 = 0.0;
pub const DEFAULT_REL_TOL: f64 = 4.0 * f64::EPSILON;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance {
    abs_tol : f64,
    rel_tol : f64,
    max_iter: Option<usize>,
}

impl Default for Tolerance {
    fn default() -> Self { Self::new() }
}

impl Tolerance {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            abs_tol : DEFAULT_ABS_TOL,
            rel_tol : DEFAULT_REL_TOL,
            max_iter: None,
        }
    }

    // getters
    #[inline] #[must_use] pub fn abs_tol(&self)  -> f64 { self.abs_tol }
    #[inline] #[must_use] pub fn rel_tol(&self)  -> f64 { self.rel_tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// Sets the absolute tolerance; must be finite and >= 0, and not zero
    /// together with `rel_tol`.
    pub fn set_abs_tol(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidAbsTol { got: v });
        }
        if v == 0.0 && self.rel_tol == 0.0 {
            return Err(ToleranceError::InvalidAbsRel { abs_tol: v, rel_tol: self.rel_tol });
        }
        self.abs_tol = v;
        Ok(self)
    }

    /// Sets the relative tolerance; must be finite and >= 0, and not zero
    /// together with `abs_tol`.
    pub fn set_rel_tol(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidRelTol { got: v });
        }
        if v == 0.0 && self.abs_tol == 0.0 {
            return Err(ToleranceError::InvalidAbsRel { abs_tol: self.abs_tol, rel_tol: v });
        }
        self.rel_tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ToleranceError> {
        if v == 0 {
            return Err(ToleranceError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(self)
    }

    /// `abs_tol + rel_tol * |x|`
    #[inline]
    #[must_use]
    pub fn threshold(&self, x: f64) -> f64 {
        mixed_tolerance(x, self.abs_tol, self.rel_tol)
    }

    /// Mixed stopping rule: `|step| <= abs_tol + rel_tol * |x|`.
    #[inline]
    #[must_use]
    pub fn is_satisfied(&self, step: f64, x: f64) -> bool {
        step.abs() <= self.threshold(x)
    }

    /// Iteration cap, falling back to `default` when unset.
    #[inline]
    #[must_use]
    pub fn max_iter_or(&self, default: usize) -> usize {
        self.max_iter.unwrap_or(default)
    }
}
