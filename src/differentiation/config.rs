//! Configuration for finite-difference estimates.
//!
//! [`CommonCfg`] — universal fields
//! └ `step` : explicit step `h`, or `None` for [`Scheme::optimal_step`]
//!
//! [`DerivativeCfg`] adds the [`Scheme`]; [`HessianCfg`] always uses
//! central differences.

use crate::differentiation::algorithms::Scheme;


#[derive(Debug, Copy, Clone, Default)]
pub struct CommonCfg {
    step: Option<f64>,
}

impl CommonCfg {
    pub const fn new() -> Self {
        Self { step: None }
    }

    pub fn step(&self) -> Option<f64> { self.step }

    pub(crate) fn with_step(&mut self, v: Option<f64>) { self.step = v; }

    /// Explicit step if set, else the optimal step of `scheme` at `x`.
    pub(crate) fn step_at(&self, scheme: Scheme, derivative: i32, x: f64) -> f64 {
        self.step.unwrap_or_else(|| scheme.optimal_step(derivative, x))
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_step(
                mut self, v: f64
            ) -> Result<Self, $crate::differentiation::errors::DifferentiationError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::differentiation::errors::DifferentiationError::InvalidStep { got: v }
                    );
                }
                self.common.with_step(Some(v));
                Ok(self)
            }
            /// Back to the automatic step.
            #[must_use]
            pub fn with_auto_step(mut self) -> Self {
                self.common.with_step(None);
                self
            }
            pub fn common(&self) -> &$crate::differentiation::config::CommonCfg {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;


/// Scalar derivative and gradient configuration
///
/// # Defaults
/// - `scheme` : [`Scheme::Central`]
/// - `step`   : automatic
#[derive(Debug, Copy, Clone, Default)]
pub struct DerivativeCfg {
    common: CommonCfg,
    scheme: Scheme,
}
impl DerivativeCfg {
    pub const fn new() -> Self {
        Self { common: CommonCfg::new(), scheme: Scheme::Central }
    }

    pub fn scheme(&self) -> Scheme { self.scheme }

    #[must_use]
    pub fn set_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }
}
impl_common_cfg!(DerivativeCfg);


/// Hessian configuration (central differences).
#[derive(Debug, Copy, Clone, Default)]
pub struct HessianCfg {
    common: CommonCfg,
}
impl HessianCfg {
    pub const fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(HessianCfg);
