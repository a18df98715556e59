//! Defines the [`QuadratureReport`] returned by every integration routine.

/// Result of an integration.
///
/// [`QuadratureReport`]
/// - `integral`        : estimate of `∫_a^b f(x) dx`
/// - `estimated_error` : error estimate of `integral`
/// - `evaluations`     : integrand evaluations
/// - `subintervals`    : subintervals used (accepted panels for adaptive rules)
/// - `algorithm_name`  : e.g. `"composite simpson"`
#[derive(Debug, Copy, Clone)]
pub struct QuadratureReport {
    pub integral:        f64,
    pub estimated_error: f64,
    pub evaluations:     usize,
    pub subintervals:    usize,
    pub algorithm_name:  &'static str,
}

impl QuadratureReport {
    pub(crate) fn empty(algorithm_name: &'static str) -> Self {
        Self {
            integral:        0.0,
            estimated_error: 0.0,
            evaluations:     0,
            subintervals:    0,
            algorithm_name,
        }
    }

    pub(crate) fn log(&self) {
        tracing::debug!(
            algorithm = self.algorithm_name,
            integral = self.integral,
            estimated_error = self.estimated_error,
            evaluations = self.evaluations,
            subintervals = self.subintervals,
            "quadrature finished"
        );
    }
}

