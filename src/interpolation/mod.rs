//! Interpolation of tabulated data `(x[i], y[i])`.
//!
//! ┌ [`lagrange`]   : global polynomial, Lagrange basis
//! ├ [`newton`]     : global polynomial, divided differences
//! ├ [`linear`]     : piecewise linear
//! ├ [`spline`]     : cubic splines (natural, not-a-knot, clamped, monotonic)
//! └ [`chebyshev`]  : Chebyshev nodes for well-conditioned polynomial fits
//!
//! Each method has two entry points: a config-driven `interpolate(cfg)`
//! returning an [`InterpolationReport`], and a fitted type implementing
//! [`Interpolator`] (built directly or through [`Algorithm::fit`]).

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;

pub mod chebyshev;
pub mod lagrange;
pub mod linear;
pub mod newton;
pub mod spline;

pub use algorithms::Algorithm;
pub use chebyshev::chebyshev_nodes;
pub use errors::InterpolationError;
pub use lagrange::LagrangePolynomial;
pub use linear::PiecewiseLinear;
pub use newton::NewtonPolynomial;
pub use report::InterpolationReport;
pub use spline::CubicSpline;
pub use traits::Interpolator;
