//! Unconstrained minimization.
//!
//! ┌ [`line_search::backtracking`] : Armijo sufficient decrease along a descent direction
//! ├ [`gradient_descent()`]        : steepest descent with backtracking
//! ├ [`newton()`]                  : Newton steps, exact or finite-difference Hessian
//! └ [`golden_section()`]          : derivative-free 1-D bracketed search
//!
//! Running out of iterations is not an error: the report carries the last
//! iterate and [`OptimizationReport::converged`] is `false`.

pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod objective;

pub mod line_search;
pub mod gradient_descent;
pub mod newton;
pub mod golden_section;

pub use config::{
    GoldenSectionCfg, GradientDescentCfg, LineSearchCfg, NewtonCfg, NewtonFallback,
};
pub use errors::OptimizationError;
pub use golden_section::golden_section;
pub use gradient_descent::gradient_descent;
pub use line_search::{backtracking, LineSearchReport};
pub use newton::{newton, NoHessian};
pub use report::{GoldenSectionReport, OptimizationReport, TerminationReason};
