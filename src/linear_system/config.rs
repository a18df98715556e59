//! Linear solver configuration.
//!
//! [`PivotCfg`]
//! └ `pivot_tol` : relative singularity threshold, scaled by `||A||_∞`
//!
//! [`RefinementCfg`]
//! ├ `max_steps` : refinement sweeps after the initial solve
//! └ `rel_tol`   : stop once `||d||_∞ <= rel_tol · ||x||_∞`

use crate::linear_system::errors::LinearSystemError;


pub const DEFAULT_PIVOT_TOL:      f64   = 8.0 * f64::EPSILON;
pub const DEFAULT_REFINE_STEPS:   usize = 5;
pub const DEFAULT_REFINE_REL_TOL: f64   = f64::EPSILON;


/// Pivoting configuration shared by elimination, LU and condition estimates.
#[derive(Debug, Copy, Clone)]
pub struct PivotCfg {
    pivot_tol: f64,
}

impl Default for PivotCfg {
    fn default() -> Self { Self::new() }
}

impl PivotCfg {
    pub const fn new() -> Self {
        Self { pivot_tol: DEFAULT_PIVOT_TOL }
    }

    pub fn pivot_tol(&self) -> f64 { self.pivot_tol }

    /// `0.0` only rejects exact zero pivots.
    pub fn set_pivot_tol(mut self, v: f64) -> Result<Self, LinearSystemError> {
        if !v.is_finite() || v < 0.0 {
            return Err(LinearSystemError::InvalidPivotTol { got: v });
        }
        self.pivot_tol = v;
        Ok(self)
    }
}


#[derive(Debug, Copy, Clone)]
pub struct RefinementCfg {
    max_steps: usize,
    rel_tol:   f64,
}

impl Default for RefinementCfg {
    fn default() -> Self { Self::new() }
}

impl RefinementCfg {
    pub const fn new() -> Self {
        Self { max_steps: DEFAULT_REFINE_STEPS, rel_tol: DEFAULT_REFINE_REL_TOL }
    }

    pub fn max_steps(&self) -> usize { self.max_steps }
    pub fn rel_tol(&self) -> f64 { self.rel_tol }

    /// `0` returns the plain LU solution with its residual.
    #[must_use]
    pub fn set_max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    pub fn set_rel_tol(mut self, v: f64) -> Result<Self, LinearSystemError> {
        if !v.is_finite() || v < 0.0 {
            return Err(LinearSystemError::InvalidTolerance { got: v });
        }
        self.rel_tol = v;
        Ok(self)
    }
}
