use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("end slope must be finite. got {got}")]
    NonFiniteSlope { got: f64 },

    #[error("evaluation point must be finite. got {got}")]
    NonFiniteQuery { got: f64 },

    #[error("invalid node count {got}: need at least 1")]
    InvalidNodeCount { got: usize },

    #[error("singular tridiagonal system: zero pivot in row {row}")]
    SingularSystem { row: usize },

    #[error("invalid interval [{a}, {b}]: must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },
}
