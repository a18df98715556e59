//! Numerical integration over a finite interval `[a, b]`.
//!
//! ┌ Fixed    : [`composite`] with a [`Rule`] and `n` subintervals
//! └ Adaptive : [`adaptive_simpson`] to an absolute tolerance
//!
//! Gauss–Legendre nodes and weights are exposed through
//! [`gauss_legendre::nodes_and_weights`].

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod integrand;

pub mod composite;
pub mod gauss_legendre;
pub mod adaptive_simpson;

pub use algorithms::Rule;
pub use adaptive_simpson::adaptive_simpson;
pub use composite::composite;
pub use config::{AdaptiveSimpsonCfg, CompositeCfg};
pub use errors::QuadratureError;
pub use report::QuadratureReport;
