//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerances and iteration limits,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `abs_fx` : function-value tolerance
//! └ `tol`    : [`Tolerance`] record
//!     ├ `abs_x`    : absolute step/width tolerance
//!     ├ `rel_x`    : relative step/width tolerance
//!     └ `max_iter` : iteration cap (optional)
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//!
//! Some algorithms (e.g. newton) have additional config arguments
//! such as a derivative threshold or a step cap.

use crate::primitives::Tolerance;


pub const DEFAULT_ABS_FX: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    abs_fx: f64,
    tol:    Tolerance,
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            abs_fx : DEFAULT_ABS_FX,
            tol    : Tolerance::new(),
        }
    }

    // getters
    pub fn abs_fx(&self)    -> f64 { self.abs_fx }
    pub fn abs_x(&self)     -> f64 { self.tol.abs_tol() }
    pub fn rel_x(&self)     -> f64 { self.tol.rel_tol() }
    pub fn max_iter(&self)  -> Option<usize> { self.tol.max_iter() }
    pub fn tolerance(&self) -> Tolerance { self.tol }

    // setters (internal)
    pub(crate) fn with_abs_fx   (&mut self, v: f64)       { self.abs_fx = v; }
    pub(crate) fn with_tolerance(&mut self, v: Tolerance) { self.tol    = v; }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_abs_fx(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidAbsFx { got: v }
                    );
                }
                self.common.with_abs_fx(v);
                Ok(self)
            }
            pub fn set_abs_x(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let tol = self.common.tolerance().set_abs_tol(v)?;
                self.common.with_tolerance(tol);
                Ok(self)
            }
            pub fn set_rel_x(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let tol = self.common.tolerance().set_rel_tol(v)?;
                self.common.with_tolerance(tol);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let tol = self.common.tolerance().set_max_iter(v)?;
                self.common.with_tolerance(tol);
                Ok(self)
            }
            /// Replaces `abs_x`, `rel_x` and `max_iter` at once.
            #[must_use]
            pub fn with_tolerance(mut self, tol: $crate::primitives::Tolerance) -> Self {
                self.common.with_tolerance(tol);
                self
            }
            pub fn common(&self) -> &$crate::root_finding::config::CommonCfg {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
