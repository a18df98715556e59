//! Linear least squares `min ||X β - y||_2`.
//!
//! ┌ [`Method::Qr`]              : Householder QR, `R β = Qᵀ y` (default)
//! └ [`Method::NormalEquations`] : Cholesky of `XᵀX`; squares the condition number
//!
//! Both paths report `κ₂(X)` from the singular values of the triangular
//! factor, so ill-posed fits show up in the report rather than as silently
//! wrong coefficients.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod jacobi;

pub mod householder;
pub mod normal_equations;
pub mod fit;
pub mod polynomial;

pub use algorithms::Method;
pub use config::FitCfg;
pub use errors::LeastSquaresError;
pub use fit::fit;
pub use polynomial::{polynomial_fit, polynomial_value, vandermonde};
pub use report::FitReport;
