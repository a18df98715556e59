//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and [`Algorithm::fit`], which builds the matching [`Interpolator`].

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::lagrange::LagrangePolynomial;
use crate::interpolation::newton::NewtonPolynomial;
use crate::interpolation::linear::PiecewiseLinear;
use crate::interpolation::spline::CubicSpline;


/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]        global polynomial, Lagrange basis
/// - [`Algorithm::Newton`]          global polynomial, divided differences
/// - [`Algorithm::Linear`]          piecewise linear
/// - [`Algorithm::SplineNatural`]   cubic spline, `S'' = 0` at both ends
/// - [`Algorithm::SplineNotAKnot`]  cubic spline, `S'''` continuous at `x[1]` and `x[n-2]`
/// - [`Algorithm::SplineClamped`]   cubic spline with given end slopes
/// - [`Algorithm::SplineMonotonic`] shape-preserving cubic (Fritsch–Carlson)
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Algorithm {
    Lagrange,
    Newton,
    Linear,
    SplineNatural,
    SplineNotAKnot,
    SplineClamped { slope_start: f64, slope_final: f64 },
    SplineMonotonic,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange           => "lagrange",
            Algorithm::Newton             => "newton",
            Algorithm::Linear             => "linear",
            Algorithm::SplineNatural      => "natural cubic spline",
            Algorithm::SplineNotAKnot     => "not-a-knot cubic spline",
            Algorithm::SplineClamped {..} => "clamped cubic spline",
            Algorithm::SplineMonotonic    => "monotonic cubic spline",
        }
    }

    /// Builds the interpolant for nodes `(x, y)`.
    ///
    /// # Errors
    /// Node validation errors ([`InterpolationError`]), and
    /// [`InterpolationError::NonFiniteSlope`] for clamped end slopes.
    pub fn fit(self, x: &[f64], y: &[f64]) -> Result<Box<dyn Interpolator>, InterpolationError> {
        Ok(match self {
            Algorithm::Lagrange        => Box::new(LagrangePolynomial::new(x, y)?),
            Algorithm::Newton          => Box::new(NewtonPolynomial::new(x, y)?),
            Algorithm::Linear          => Box::new(PiecewiseLinear::new(x, y)?),
            Algorithm::SplineNatural   => Box::new(CubicSpline::natural(x, y)?),
            Algorithm::SplineNotAKnot  => Box::new(CubicSpline::not_a_knot(x, y)?),
            Algorithm::SplineClamped { slope_start, slope_final }
                                       => Box::new(CubicSpline::clamped(x, y, slope_start, slope_final)?),
            Algorithm::SplineMonotonic => Box::new(CubicSpline::monotonic(x, y)?),
        })
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
