use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OdeError {
    #[error("invalid interval: t0 = {t0}, t_end = {t_end}. need finite t_end >= t0")]
    InvalidInterval { t0: f64, t_end: f64 },

    #[error("invalid step {got}: must be finite and > 0")]
    InvalidStep { got: f64 },

    #[error("initial state must be finite and non-empty")]
    InvalidInitialState,

    #[error("invalid tolerance {got}: must be finite and >= 0")]
    InvalidTolerance { got: f64 },

    #[error("either abs_tol or rel_tol must be > 0")]
    ZeroTolerance,

    #[error("invalid step factors: need 0 < min_factor {min} < 1 < max_factor {max}, 0 < safety {safety} <= 1")]
    InvalidFactors { min: f64, max: f64, safety: f64 },

    #[error("invalid max_steps: must be >= 1")]
    InvalidMaxSteps,

    #[error("right-hand side returned {got} components, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("state became non-finite at t = {t}")]
    NonFiniteState { t: f64 },

    #[error("step size {h} fell below h_min {h_min} at t = {t}")]
    StepSizeUnderflow { t: f64, h: f64, h_min: f64 },

    #[error("step budget of {max_steps} exhausted at t = {t}")]
    MaxSteps { t: f64, max_steps: usize },
}
