//! Optimization configuration.
//!
//! [`CommonCfg`] — shared by [`GradientDescentCfg`] and [`NewtonCfg`]
//! ├ `grad_tol` : stop once `||∇f(x)||_2 <= grad_tol`
//! └ `tol`      : [`Tolerance`] on the step, `||Δx|| <= abs_x + rel_x ||x||`
//!
//! [`LineSearchCfg`]
//! ├ `c1`             : Armijo constant, `f(x + αp) <= f(x) + c1 α gᵀp`
//! ├ `shrink`         : `α <- shrink · α` after a failed trial
//! ├ `initial_step`   : first trial `α`
//! └ `max_backtracks` : trials before [`OptimizationError::LineSearchFailed`]
//!
//! [`NewtonCfg`] adds the [`NewtonFallback`] policy and the
//! [`HessianCfg`] used when no Hessian is supplied.

use crate::differentiation::HessianCfg;
use crate::optimization::errors::OptimizationError;
use crate::primitives::Tolerance;


pub const DEFAULT_GRAD_TOL:        f64   = 1e-8;
pub const DEFAULT_ARMIJO_C1:       f64   = 1e-4;
pub const DEFAULT_SHRINK:          f64   = 0.5;
pub const DEFAULT_MAX_BACKTRACKS:  usize = 60;
pub const DEFAULT_GD_MAX_ITER:     usize = 10_000;
pub const DEFAULT_NEWTON_MAX_ITER: usize = 100;
pub const DEFAULT_GOLDEN_X_TOL:    f64   = 1e-10;
pub const DEFAULT_GOLDEN_MAX_ITER: usize = 200;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    grad_tol: f64,
    tol:      Tolerance,
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

impl CommonCfg {
    pub const fn new() -> Self {
        Self { grad_tol: DEFAULT_GRAD_TOL, tol: Tolerance::new() }
    }

    pub fn grad_tol(&self)  -> f64 { self.grad_tol }
    pub fn tolerance(&self) -> Tolerance { self.tol }

    pub(crate) fn with_grad_tol (&mut self, v: f64)       { self.grad_tol = v; }
    pub(crate) fn with_tolerance(&mut self, v: Tolerance) { self.tol      = v; }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_grad_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::optimization::errors::OptimizationError> {
                if !v.is_finite() || v < 0.0 {
                    return Err($crate::optimization::errors::OptimizationError::InvalidParameter {
                        name: "grad_tol",
                        got:  v,
                    });
                }
                self.common.with_grad_tol(v);
                Ok(self)
            }
            pub fn set_abs_x(
                mut self, v: f64
            ) -> Result<Self, $crate::optimization::errors::OptimizationError> {
                let tol = self.common.tolerance().set_abs_tol(v)?;
                self.common.with_tolerance(tol);
                Ok(self)
            }
            pub fn set_rel_x(
                mut self, v: f64
            ) -> Result<Self, $crate::optimization::errors::OptimizationError> {
                let tol = self.common.tolerance().set_rel_tol(v)?;
                self.common.with_tolerance(tol);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::optimization::errors::OptimizationError> {
                let tol = self.common.tolerance().set_max_iter(v)?;
                self.common.with_tolerance(tol);
                Ok(self)
            }
            #[must_use]
            pub fn set_line_search(mut self, v: $crate::optimization::config::LineSearchCfg) -> Self {
                self.line_search = v;
                self
            }
            pub fn common(&self) -> &$crate::optimization::config::CommonCfg {
                &self.common
            }
            pub fn line_search(&self) -> $crate::optimization::config::LineSearchCfg {
                self.line_search
            }
        }
    };
}
pub(crate) use impl_common_cfg;


/// Backtracking line-search parameters.
#[derive(Debug, Copy, Clone)]
pub struct LineSearchCfg {
    c1:             f64,
    shrink:         f64,
    initial_step:   f64,
    max_backtracks: usize,
}

impl Default for LineSearchCfg {
    fn default() -> Self { Self::new() }
}

impl LineSearchCfg {
    pub const fn new() -> Self {
        Self {
            c1:             DEFAULT_ARMIJO_C1,
            shrink:         DEFAULT_SHRINK,
            initial_step:   1.0,
            max_backtracks: DEFAULT_MAX_BACKTRACKS,
        }
    }

    pub fn c1(&self) -> f64 { self.c1 }
    pub fn shrink(&self) -> f64 { self.shrink }
    pub fn initial_step(&self) -> f64 { self.initial_step }
    pub fn max_backtracks(&self) -> usize { self.max_backtracks }

    /// `0 < c1 < 1`
    pub fn set_c1(mut self, v: f64) -> Result<Self, OptimizationError> {
        if !(v > 0.0 && v < 1.0) {
            return Err(OptimizationError::InvalidParameter { name: "c1", got: v });
        }
        self.c1 = v;
        Ok(self)
    }

    /// `0 < shrink < 1`
    pub fn set_shrink(mut self, v: f64) -> Result<Self, OptimizationError> {
        if !(v > 0.0 && v < 1.0) {
            return Err(OptimizationError::InvalidParameter { name: "shrink", got: v });
        }
        self.shrink = v;
        Ok(self)
    }

    pub fn set_initial_step(mut self, v: f64) -> Result<Self, OptimizationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(OptimizationError::InvalidParameter { name: "initial_step", got: v });
        }
        self.initial_step = v;
        Ok(self)
    }

    pub fn set_max_backtracks(mut self, v: usize) -> Result<Self, OptimizationError> {
        if v == 0 {
            return Err(OptimizationError::InvalidParameter { name: "max_backtracks", got: 0.0 });
        }
        self.max_backtracks = v;
        Ok(self)
    }
}


/// Gradient descent configuration
///
/// # Defaults
/// - `max_iter` : [`DEFAULT_GD_MAX_ITER`]
#[derive(Debug, Copy, Clone, Default)]
pub struct GradientDescentCfg {
    common:      CommonCfg,
    line_search: LineSearchCfg,
}
impl GradientDescentCfg {
    pub const fn new() -> Self {
        Self { common: CommonCfg::new(), line_search: LineSearchCfg::new() }
    }
}
impl_common_cfg!(GradientDescentCfg);


/// What [`newton`](crate::optimization::newton) does when the Newton
/// direction is unusable (singular Hessian, or `gᵀp >= 0`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum NewtonFallback {
    /// Take a steepest-descent step through the line search instead.
    #[default]
    Damped,
    /// Fail with [`OptimizationError::NonDescentDirection`].
    Fail,
}


/// Newton configuration
///
/// # Defaults
/// - `max_iter` : [`DEFAULT_NEWTON_MAX_ITER`]
/// - `fallback` : [`NewtonFallback::Damped`]
/// - `hessian`  : central differences with automatic steps
#[derive(Debug, Copy, Clone, Default)]
pub struct NewtonCfg {
    common:      CommonCfg,
    line_search: LineSearchCfg,
    fallback:    NewtonFallback,
    hessian:     HessianCfg,
}
impl NewtonCfg {
    pub const fn new() -> Self {
        Self {
            common:      CommonCfg::new(),
            line_search: LineSearchCfg::new(),
            fallback:    NewtonFallback::Damped,
            hessian:     HessianCfg::new(),
        }
    }

    pub fn fallback(&self) -> NewtonFallback { self.fallback }
    pub fn hessian(&self) -> HessianCfg { self.hessian }

    #[must_use]
    pub fn set_fallback(mut self, v: NewtonFallback) -> Self {
        self.fallback = v;
        self
    }

    /// Finite-difference settings for the Hessian when none is supplied.
    #[must_use]
    pub fn set_hessian(mut self, v: HessianCfg) -> Self {
        self.hessian = v;
        self
    }
}
impl_common_cfg!(NewtonCfg);


/// Golden-section configuration
///
/// - `x_tol`    : stop once the bracket is narrower than `x_tol`
/// - `max_iter` : bracket reductions before giving up
#[derive(Debug, Copy, Clone)]
pub struct GoldenSectionCfg {
    x_tol:    f64,
    max_iter: usize,
}

impl Default for GoldenSectionCfg {
    fn default() -> Self { Self::new() }
}

impl GoldenSectionCfg {
    pub const fn new() -> Self {
        Self { x_tol: DEFAULT_GOLDEN_X_TOL, max_iter: DEFAULT_GOLDEN_MAX_ITER }
    }

    pub fn x_tol(&self) -> f64 { self.x_tol }
    pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, OptimizationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(OptimizationError::InvalidParameter { name: "x_tol", got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, OptimizationError> {
        if v == 0 {
            return Err(OptimizationError::InvalidParameter { name: "max_iter", got: 0.0 });
        }
        self.max_iter = v;
        Ok(self)
    }
}
