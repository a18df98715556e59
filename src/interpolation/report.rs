//! Defines the [`InterpolationReport`] struct returned by all
//! interpolation algorithms.
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of data and evaluation points,
//! and results of evaluating the interpolant.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"linear"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
/// - `extrapolated`   : `true` where the evaluation point lies outside `[x[0], x[n-1]]`
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub extrapolated: Vec<bool>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
            extrapolated: Vec::with_capacity(n_evaluated),
        }
    }

    /// `true` if any evaluation point needed extrapolation.
    #[inline]
    pub fn any_extrapolated(&self) -> bool {
        self.extrapolated.iter().any(|&e| e)
    }

    /// Evaluates `interp` at every point of `x_eval`, flagging extrapolation.
    pub(crate) fn evaluate<I: Interpolator + ?Sized>(
        algorithm: Algorithm,
        interp: &I,
        n_provided: usize,
        x_eval: &[f64],
    ) -> Result<Self, InterpolationError> {
        let mut report = Self::new(algorithm, n_provided, x_eval.len());
        for &xq in x_eval {
            report.evaluated.push(interp.eval(xq)?);
            report.extrapolated.push(interp.is_extrapolated(xq));
        }

        let n_out = report.extrapolated.iter().filter(|&&e| e).count();
        if n_out > 0 {
            tracing::warn!(
                algorithm = report.algorithm_name,
                n_extrapolated = n_out,
                "evaluation points outside the node range"
            );
        }
        tracing::debug!(
            algorithm = report.algorithm_name,
            n_provided,
            n_evaluated = report.n_evaluated,
            "interpolation evaluated"
        );
        Ok(report)
    }
}
