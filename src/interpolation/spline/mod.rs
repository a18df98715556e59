//! Cubic splines.
//!
//! Every variant is stored in Hermite form: node values `y[i]` and node
//! slopes `m[i] = S'(x[i])`. The variants differ only in how the slopes
//! are chosen.
//!
//! ┌ [`natural`]    : `S''(x[0]) = S''(x[n-1]) = 0`
//! ├ [`not_a_knot`] : `S'''` continuous across `x[1]` and `x[n-2]`
//! ├ [`clamped`]    : `S'(x[0])`, `S'(x[n-1])` given
//! └ [`monotonic`]  : Fritsch–Carlson slopes, no overshoot (C¹ only)
//!
//! The first three are C² and solve a tridiagonal system for the slopes
//! with the Thomas algorithm ([`helpers`]).

pub(crate) mod helpers;
pub mod natural;
pub mod not_a_knot;
pub mod clamped;
pub mod monotonic;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_nodes, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::{check_query, Interpolator};
use helpers::{deltas, find_interval, spacings};


/// End condition / slope rule of a [`CubicSpline`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum SplineKind {
    Natural,
    NotAKnot,
    Clamped { slope_start: f64, slope_final: f64 },
    Monotonic,
}

impl SplineKind {
    pub(crate) fn algorithm(self) -> Algorithm {
        match self {
            SplineKind::Natural   => Algorithm::SplineNatural,
            SplineKind::NotAKnot  => Algorithm::SplineNotAKnot,
            SplineKind::Clamped { slope_start, slope_final }
                                  => Algorithm::SplineClamped { slope_start, slope_final },
            SplineKind::Monotonic => Algorithm::SplineMonotonic,
        }
    }
}


/// Piecewise cubic Hermite interpolant.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x:         Vec<f64>,
    y:         Vec<f64>,
    slopes:    Vec<f64>,
    kind:      SplineKind,
}

impl CubicSpline {
    pub fn natural(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::build(x, y, SplineKind::Natural)
    }

    pub fn not_a_knot(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::build(x, y, SplineKind::NotAKnot)
    }

    pub fn clamped(
        x: &[f64],
        y: &[f64],
        slope_start: f64,
        slope_final: f64,
    ) -> Result<Self, InterpolationError> {
        Self::build(x, y, SplineKind::Clamped { slope_start, slope_final })
    }

    pub fn monotonic(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::build(x, y, SplineKind::Monotonic)
    }

    pub(crate) fn build(
        x: &[f64],
        y: &[f64],
        kind: SplineKind,
    ) -> Result<Self, InterpolationError> {
        check_nodes(x, y, DEFAULT_X_TOL)?;
        Self::from_validated(x, y, kind)
    }

    /// Assumes `(x, y)` already passed node validation.
    pub(crate) fn from_validated(
        x: &[f64],
        y: &[f64],
        kind: SplineKind,
    ) -> Result<Self, InterpolationError> {
        let h = spacings(x);
        let d = deltas(y, &h);

        let slopes = match kind {
            SplineKind::Natural   => natural::slopes(&h, &d)?,
            SplineKind::NotAKnot  => not_a_knot::slopes(&h, &d)?,
            SplineKind::Monotonic => monotonic::slopes(&h, &d),
            SplineKind::Clamped { slope_start, slope_final } => {
                for s in [slope_start, slope_final] {
                    if !s.is_finite() {
                        return Err(InterpolationError::NonFiniteSlope { got: s });
                    }
                }
                clamped::slopes(&h, &d, slope_start, slope_final)?
            }
        };

        Ok(Self { x: x.to_vec(), y: y.to_vec(), slopes, kind })
    }

    /// `S'(x[i])` at every node
    #[inline] #[must_use]
    pub fn slopes(&self) -> &[f64] { &self.slopes }

    #[inline] #[must_use]
    pub fn algorithm(&self) -> Algorithm { self.kind.algorithm() }

    /// Piece index, local step `h` and normalized position `t` for `xq`
    #[inline]
    fn locate(&self, xq: f64) -> (usize, f64, f64) {
        let i = find_interval(&self.x, xq);
        let h = self.x[i + 1] - self.x[i];
        (i, h, (xq - self.x[i]) / h)
    }

    /// Second derivative `S''(xq)`.
    pub fn second_derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let (i, h, t) = self.locate(xq);

        let h00 = 12.0 * t - 6.0;
        let h10 = 6.0 * t - 4.0;
        let h01 = -h00;
        let h11 = 6.0 * t - 2.0;

        Ok((h00 * self.y[i]
            + h10 * h * self.slopes[i]
            + h01 * self.y[i + 1]
            + h11 * h * self.slopes[i + 1]) / (h * h))
    }
}

impl Interpolator for CubicSpline {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let (i, h, t) = self.locate(xq);

        let h00 = (2.0 * t - 3.0) * t * t + 1.0;
        let h10 = (t - 2.0) * t * t + t;
        let h01 = -((2.0 * t - 3.0) * t * t);
        let h11 = (t * t) * (t - 1.0);

        Ok(h00 * self.y[i]
            + h10 * h * self.slopes[i]
            + h01 * self.y[i + 1]
            + h11 * h * self.slopes[i + 1])
    }

    fn derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;
        let (i, h, t) = self.locate(xq);

        let h00 = 6.0 * t * (t - 1.0);
        let h10 = (3.0 * t - 4.0) * t + 1.0;
        let h01 = -h00;
        let h11 = (3.0 * t - 2.0) * t;

        Ok((h00 * self.y[i] + h01 * self.y[i + 1]) / h
            + h10 * self.slopes[i]
            + h11 * self.slopes[i + 1])
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
