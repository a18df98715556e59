//! ODE integration configuration.
//!
//! [`FixedStepCfg`]
//! ├ `t_end`  : end of the integration interval
//! ├ `step`   : step `h`; the last step is shortened to land on `t_end`
//! └ `method` : [`Method`], RK4 by default
//!
//! [`AdaptiveCfg`]
//! ├ `t_end`                  : end of the integration interval
//! ├ `method`                 : [`AdaptiveMethod`], Bogacki–Shampine by default
//! ├ `abs_tol`, `rel_tol`     : per-component `|e_i| <= abs_tol + rel_tol · |y_i|`
//! ├ `initial_step`           : first trial step, `(t_end - t0) / 100` if unset
//! ├ `h_min`                  : smallest step before [`OdeError::StepSizeUnderflow`]
//! ├ `safety`, `min_factor`,
//! │ `max_factor`             : step factor `safety · (1/err)^{1/(q+1)}`, clamped
//! └ `max_steps`              : accepted plus rejected steps before [`OdeError::MaxSteps`]

use crate::ode::algorithms::{AdaptiveMethod, Method};
use crate::ode::errors::OdeError;


pub const DEFAULT_ABS_TOL:    f64   = 1e-8;
pub const DEFAULT_REL_TOL:    f64   = 1e-8;
pub const DEFAULT_H_MIN:      f64   = 1e-12;
pub const DEFAULT_SAFETY:     f64   = 0.9;
pub const DEFAULT_MIN_FACTOR: f64   = 0.2;
pub const DEFAULT_MAX_FACTOR: f64   = 5.0;
pub const DEFAULT_MAX_STEPS:  usize = 100_000;


fn check_step(v: f64) -> Result<f64, OdeError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(OdeError::InvalidStep { got: v });
    }
    Ok(v)
}


#[derive(Debug, Copy, Clone)]
pub struct FixedStepCfg {
    t_end:  f64,
    step:   f64,
    method: Method,
}

impl FixedStepCfg {
    /// RK4 from `t0` to `t_end` with step `step`.
    pub fn new(t_end: f64, step: f64) -> Result<Self, OdeError> {
        Ok(Self { t_end, step: check_step(step)?, method: Method::Rk4 })
    }

    pub fn t_end(&self) -> f64 { self.t_end }
    pub fn step(&self) -> f64 { self.step }
    pub fn method(&self) -> Method { self.method }

    #[must_use]
    pub fn set_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn set_step(mut self, v: f64) -> Result<Self, OdeError> {
        self.step = check_step(v)?;
        Ok(self)
    }

    #[must_use]
    pub fn set_t_end(mut self, v: f64) -> Self {
        self.t_end = v;
        self
    }
}


#[derive(Debug, Copy, Clone)]
pub struct AdaptiveCfg {
    t_end:        f64,
    method:       AdaptiveMethod,
    abs_tol:      f64,
    rel_tol:      f64,
    initial_step: Option<f64>,
    h_min:        f64,
    safety:       f64,
    min_factor:   f64,
    max_factor:   f64,
    max_steps:    usize,
}

impl AdaptiveCfg {
    pub const fn new(t_end: f64) -> Self {
        Self {
            t_end,
            method:       AdaptiveMethod::BogackiShampine,
            abs_tol:      DEFAULT_ABS_TOL,
            rel_tol:      DEFAULT_REL_TOL,
            initial_step: None,
            h_min:        DEFAULT_H_MIN,
            safety:       DEFAULT_SAFETY,
            min_factor:   DEFAULT_MIN_FACTOR,
            max_factor:   DEFAULT_MAX_FACTOR,
            max_steps:    DEFAULT_MAX_STEPS,
        }
    }

    // getters
    pub fn t_end(&self) -> f64 { self.t_end }
    pub fn method(&self) -> AdaptiveMethod { self.method }
    pub fn abs_tol(&self) -> f64 { self.abs_tol }
    pub fn rel_tol(&self) -> f64 { self.rel_tol }
    pub fn initial_step(&self) -> Option<f64> { self.initial_step }
    pub fn h_min(&self) -> f64 { self.h_min }
    pub fn safety(&self) -> f64 { self.safety }
    pub fn min_factor(&self) -> f64 { self.min_factor }
    pub fn max_factor(&self) -> f64 { self.max_factor }
    pub fn max_steps(&self) -> usize { self.max_steps }

    // setters
    #[must_use]
    pub fn set_method(mut self, method: AdaptiveMethod) -> Self {
        self.method = method;
        self
    }

    pub fn set_abs_tol(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v < 0.0 {
            return Err(OdeError::InvalidTolerance { got: v });
        }
        if v == 0.0 && self.rel_tol == 0.0 {
            return Err(OdeError::ZeroTolerance);
        }
        self.abs_tol = v;
        Ok(self)
    }

    pub fn set_rel_tol(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v < 0.0 {
            return Err(OdeError::InvalidTolerance { got: v });
        }
        if v == 0.0 && self.abs_tol == 0.0 {
            return Err(OdeError::ZeroTolerance);
        }
        self.rel_tol = v;
        Ok(self)
    }

    pub fn set_initial_step(mut self, v: f64) -> Result<Self, OdeError> {
        self.initial_step = Some(check_step(v)?);
        Ok(self)
    }

    pub fn set_h_min(mut self, v: f64) -> Result<Self, OdeError> {
        self.h_min = check_step(v)?;
        Ok(self)
    }

    /// Sets `safety`, `min_factor` and `max_factor` together.
    pub fn set_factors(mut self, safety: f64, min: f64, max: f64) -> Result<Self, OdeError> {
        let ok = safety > 0.0 && safety <= 1.0 && min > 0.0 && min < 1.0 && max > 1.0 && max.is_finite();
        if !ok {
            return Err(OdeError::InvalidFactors { min, max, safety });
        }
        self.safety     = safety;
        self.min_factor = min;
        self.max_factor = max;
        Ok(self)
    }

    pub fn set_max_steps(mut self, v: usize) -> Result<Self, OdeError> {
        if v == 0 {
            return Err(OdeError::InvalidMaxSteps);
        }
        self.max_steps = v;
        Ok(self)
    }

    #[must_use]
    pub fn set_t_end(mut self, v: f64) -> Self {
        self.t_end = v;
        self
    }
}
