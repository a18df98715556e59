//! Finite-difference differentiation.
//!
//! ┌ Scalar       : [`first_derivative`], [`second_derivative`]
//! └ Multivariate : [`gradient`], [`hessian`]
//!
//! Every estimate comes with an error estimate built from a second
//! evaluation at twice the step, plus a round-off term.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod sampler;

pub mod finite_difference;
pub mod gradient;
pub mod hessian;

pub use algorithms::Scheme;
pub use config::{DerivativeCfg, HessianCfg};
pub use errors::DifferentiationError;
pub use finite_difference::{first_derivative, second_derivative};
pub use gradient::gradient;
pub use hessian::hessian;
pub use report::{DerivativeReport, GradientReport, HessianReport};
