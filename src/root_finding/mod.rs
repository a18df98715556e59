//! Scalar root finding.
//!
//! ┌ Bracket  : [`bisection`]
//! ├ Open     : [`newton`], [`secant`], [`fixed_point`]
//! └ Compound : [`brent`]
//!
//! Every solver returns a [`RootFindingReport`]; running out of iterations
//! is reported through [`RootFindingReport::converged`], never as an error.

// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod signs;
pub(crate) mod tolerances;

// algorithms
pub mod bisection;
pub mod secant;
pub mod newton;
pub mod fixed_point;
pub mod brent;

pub use report::RootFindingReport;
pub use bisection::{bisection, BisectionCfg, BisectionError};
pub use newton::{newton, NewtonCfg, NewtonError};
pub use secant::{secant, SecantCfg, SecantError};
pub use fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
pub use brent::{brent, BrentCfg, BrentError};
