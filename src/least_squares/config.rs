//! Least-squares configuration.
//!
//! [`FitCfg`]
//! ├ `method`   : [`Method`], QR by default
//! └ `rank_tol` : `|r_kk| <= rank_tol · max_i |r_ii|` means rank deficient

use crate::least_squares::algorithms::Method;
use crate::least_squares::errors::LeastSquaresError;


pub const DEFAULT_RANK_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct FitCfg {
    method:   Method,
    rank_tol: f64,
}

impl Default for FitCfg {
    fn default() -> Self { Self::new() }
}

impl FitCfg {
    pub const fn new() -> Self {
        Self { method: Method::Qr, rank_tol: DEFAULT_RANK_TOL }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn rank_tol(&self) -> f64 { self.rank_tol }

    #[must_use]
    pub fn set_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn set_rank_tol(mut self, v: f64) -> Result<Self, LeastSquaresError> {
        if !v.is_finite() || !(0.0..1.0).contains(&v) {
            return Err(LeastSquaresError::InvalidRankTol { got: v });
        }
        self.rank_tol = v;
        Ok(self)
    }
}
