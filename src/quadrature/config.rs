//! Quadrature configuration.
//!
//! [`CompositeCfg`]
//! └ `subintervals` : number of subintervals `n` (even for Simpson)
//!
//! [`AdaptiveSimpsonCfg`]
//! ├ `abs_tol`   : absolute tolerance on the whole interval
//! └ `max_depth` : recursion bound; exceeding it is an error

use crate::quadrature::errors::QuadratureError;


pub const DEFAULT_SUBINTERVALS: usize = 16;
pub const DEFAULT_ABS_TOL:      f64   = 1e-10;
pub const DEFAULT_MAX_DEPTH:    usize = 50;


#[derive(Debug, Copy, Clone)]
pub struct CompositeCfg {
    subintervals: usize,
}

impl Default for CompositeCfg {
    fn default() -> Self { Self::new() }
}

impl CompositeCfg {
    pub const fn new() -> Self {
        Self { subintervals: DEFAULT_SUBINTERVALS }
    }

    pub fn subintervals(&self) -> usize { self.subintervals }

    pub fn set_subintervals(mut self, v: usize) -> Result<Self, QuadratureError> {
        if v == 0 {
            return Err(QuadratureError::InvalidSubintervals { got: v });
        }
        self.subintervals = v;
        Ok(self)
    }
}


#[derive(Debug, Copy, Clone)]
pub struct AdaptiveSimpsonCfg {
    abs_tol:   f64,
    max_depth: usize,
}

impl Default for AdaptiveSimpsonCfg {
    fn default() -> Self { Self::new() }
}

impl AdaptiveSimpsonCfg {
    pub const fn new() -> Self {
        Self { abs_tol: DEFAULT_ABS_TOL, max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn abs_tol(&self) -> f64 { self.abs_tol }
    pub fn max_depth(&self) -> usize { self.max_depth }

    pub fn set_abs_tol(mut self, v: f64) -> Result<Self, QuadratureError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(QuadratureError::InvalidTolerance { got: v });
        }
        self.abs_tol = v;
        Ok(self)
    }

    pub fn set_max_depth(mut self, v: usize) -> Result<Self, QuadratureError> {
        if v == 0 {
            return Err(QuadratureError::InvalidMaxDepth { got: v });
        }
        self.max_depth = v;
        Ok(self)
    }
}
