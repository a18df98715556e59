//! Explicit Runge–Kutta integration of `y' = f(t, y)`, `y(t0) = y0`.
//!
//! ┌ [`FixedStepIntegrator`] : constant step, [`Method`]
//! └ [`AdaptiveIntegrator`]  : local error control, [`AdaptiveMethod`]
//!
//! Both are lazy iterators over [`Sample`]s: `(t0, y0)` comes first and the
//! last sample sits exactly at `t_end`. Cloning an integrator gives an
//! independent copy; `restart` rewinds it to `t0`.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod sample;
pub(crate) mod tableau;

pub mod fixed_step;
pub mod adaptive;

pub use adaptive::{solve_adaptive, AdaptiveIntegrator};
pub use algorithms::{AdaptiveMethod, Method};
pub use config::{AdaptiveCfg, FixedStepCfg};
pub use errors::OdeError;
pub use fixed_step::{solve_fixed, FixedStepIntegrator};
pub use sample::Sample;
