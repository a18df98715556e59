use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("invalid interval [{a}, {b}]: end points must be finite")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid number of subintervals {got}: must be >= 1")]
    InvalidSubintervals { got: usize },

    #[error("simpson's rule needs an even number of subintervals. got {got}")]
    OddSubintervals { got: usize },

    #[error("invalid gauss-legendre point count {got}: must be in 1..={max}")]
    InvalidGaussPoints { got: usize, max: usize },

    #[error("invalid tolerance {got}: must be finite and > 0")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_depth {got}: must be >= 1")]
    InvalidMaxDepth { got: usize },

    #[error("non-finite integrand at x = {x}: f(x) = {fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("maximum subdivision depth {depth} reached on [{a}, {b}]")]
    MaxSubdivision { depth: usize, a: f64, b: f64 },
}
