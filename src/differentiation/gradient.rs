//! Gradient of `f: R^n -> R` by one scalar finite difference per coordinate.

use crate::differentiation::config::DerivativeCfg;
use crate::differentiation::errors::DifferentiationError;
use crate::differentiation::finite_difference::first_derivative;
use crate::differentiation::report::GradientReport;
use crate::primitives::float::non_finite_idx;
use crate::primitives::Vector;


/// Gradient `∇f(x)`; each component is a [`first_derivative`] along `e_i`
/// with its own step.
pub fn gradient<F: Fn(&Vector) -> f64>(
    f: F,
    x: &Vector,
    cfg: DerivativeCfg,
) -> Result<GradientReport, DifferentiationError> {
    if x.is_empty() {
        return Err(DifferentiationError::EmptyPoint);
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(DifferentiationError::NonFiniteX { got: x[idx] });
    }

    let n = x.len();
    let mut grad  = Vector::zeros(n);
    let mut error = Vector::zeros(n);
    let mut evaluations = 0;

    for i in 0..n {
        let mut probe = x.clone();
        let partial = first_derivative(
            |t| {
                probe[i] = t;
                f(&probe)
            },
            x[i],
            cfg,
        )?;
        grad[i]  = partial.value;
        error[i] = partial.estimated_error;
        evaluations += partial.evaluations;
    }

    tracing::trace!(dim = n, evaluations, "gradient estimated");
    Ok(GradientReport {
        gradient:        grad,
        estimated_error: error,
        evaluations,
        algorithm_name:  cfg.scheme().scheme_name(),
    })
}
