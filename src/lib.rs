//! Classical numerical methods with consistent convergence and error reporting.
//!
//! Every solver is a plain function (or a small fitted type) that receives its
//! inputs and an explicit configuration, and returns a self-contained report.
//! Nothing is cached between calls and no global state is kept.
//!
//! ```text
//! primitives       floats, tolerances, vectors, matrices
//! root_finding     bisection, newton, secant, fixed point, brent
//! interpolation    lagrange, newton, linear, cubic splines
//! differentiation  finite differences, gradients, hessians
//! quadrature       composite rules, gauss-legendre, adaptive simpson
//! linear_system    gaussian elimination, lu, refinement
//! least_squares    householder qr, normal equations
//! ode              fixed-step and adaptive runge-kutta
//! optimization     line search, gradient descent, newton, golden section
//! ```
//!
//! Diagnostics are emitted through [`tracing`]; installing a subscriber is
//! left to the caller.

pub mod primitives;

pub mod root_finding;
pub mod interpolation;
pub mod differentiation;
pub mod quadrature;
pub mod linear_system;
pub mod least_squares;
pub mod ode;
pub mod optimization;

pub use primitives::{Matrix, Tolerance, Vector};
