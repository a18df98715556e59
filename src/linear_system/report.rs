//! Defines the [`SolveReport`] returned by the linear solvers.

use crate::primitives::{Matrix, Vector};


/// Solution of `A x = b`.
///
/// [`SolveReport`]
/// - `solution`         : `x`
/// - `residual_norm`    : `||b - A x||_2` of the returned `x`
/// - `residual_history` : residual norm after the initial solve and after
///                        every refinement step
/// - `refinement_steps` : refinement sweeps performed (`0` without refinement)
/// - `algorithm_name`   : e.g. `"gaussian elimination"`
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solution:         Vector,
    pub residual_norm:    f64,
    pub residual_history: Vec<f64>,
    pub refinement_steps: usize,
    pub algorithm_name:   &'static str,
}

impl SolveReport {
    pub(crate) fn log(&self) {
        tracing::debug!(
            algorithm = self.algorithm_name,
            n = self.solution.len(),
            residual_norm = self.residual_norm,
            refinement_steps = self.refinement_steps,
            "linear solve finished"
        );
    }
}


/// `b - A x`
pub(crate) fn residual(a: &Matrix, x: &[f64], b: &[f64]) -> Vector {
    (0..a.nrows())
        .map(|i| b[i] - a.row(i).iter().zip(x).map(|(aij, xj)| aij * xj).sum::<f64>())
        .collect()
}
