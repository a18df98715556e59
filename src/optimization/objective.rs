//! Checked calls into the user's objective and gradient.

use crate::optimization::errors::OptimizationError;
use crate::primitives::float::non_finite_idx;
use crate::primitives::Vector;


pub(crate) fn check_start(x0: &Vector) -> Result<(), OptimizationError> {
    if x0.is_empty() {
        return Err(OptimizationError::EmptyPoint);
    }
    if non_finite_idx(x0).is_some() {
        return Err(OptimizationError::NonFiniteStart);
    }
    Ok(())
}

#[inline]
pub(crate) fn value<F: Fn(&Vector) -> f64>(f: &F, x: &Vector) -> Result<f64, OptimizationError> {
    let fx = f(x);
    if !fx.is_finite() {
        return Err(OptimizationError::NonFiniteObjective { fx });
    }
    Ok(fx)
}

pub(crate) fn gradient<G: Fn(&Vector) -> Vector>(
    grad: &G,
    x: &Vector,
) -> Result<Vector, OptimizationError> {
    let g = grad(x);
    if g.len() != x.len() {
        return Err(OptimizationError::GradientLength { expected: x.len(), got: g.len() });
    }
    if !g.is_finite() {
        return Err(OptimizationError::NonFiniteGradient);
    }
    Ok(g)
}
