use crate::interpolation::errors::InterpolationError;

/// A fitted interpolant over a fixed node set.
///
/// Evaluation outside `domain()` extrapolates with the end piece;
/// [`Interpolator::is_extrapolated`] tells the caller when that happens.
pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// first derivative of the interpolant at `x`
    fn derivative(&self, x: f64) -> Result<f64, InterpolationError>;

    /// `(x[0], x[n-1])` of the node set
    fn domain(&self) -> (f64, f64);

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    #[inline]
    fn is_extrapolated(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        x < lo || x > hi
    }
}


#[inline]
pub(crate) fn check_query(x: f64) -> Result<(), InterpolationError> {
    if x.is_finite() { Ok(()) } else { Err(InterpolationError::NonFiniteQuery { got: x }) }
}
