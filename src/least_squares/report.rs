//! Defines the [`FitReport`] returned by [`fit`](crate::least_squares::fit).

use crate::primitives::Vector;


/// Result of a least-squares fit.
///
/// [`FitReport`]
/// - `coefficients`     : `β`
/// - `residual_norm`    : `||y - X β||_2`
/// - `singular_values`  : singular values of `X`, descending
/// - `condition_number` : `κ₂(X) = σ_max / σ_min`
/// - `method_name`      : e.g. `"householder qr"`
#[derive(Debug, Clone)]
pub struct FitReport {
    pub coefficients:     Vector,
    pub residual_norm:    f64,
    pub singular_values:  Vector,
    pub condition_number: f64,
    pub method_name:      &'static str,
}
