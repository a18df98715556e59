//! Numeric primitives shared by every solver module.
//!
//! - [`float`]     : comparisons, error measures and ULP helpers
//! - [`tolerance`] : the `{abs_tol, rel_tol, max_iter}` record
//! - [`vector`]    : owned vectors with value semantics
//! - [`matrix`]    : dense row-major matrices

pub mod errors;
pub mod float;
pub mod tolerance;
pub mod vector;
pub mod matrix;

pub use errors::{DimensionError, ToleranceError};
pub use matrix::Matrix;
pub use tolerance::Tolerance;
pub use vector::Vector;
