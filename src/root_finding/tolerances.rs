//! Tolerance utilities for root-finding algorithms.
//!
//! Provides types and helpers for computing stopping tolerances
//! consistently across algorithm categories.
//!
//! `DynamicTolerance` : method-specific per-iteration tolerance
//! - `WidthTol(a, b)` : bracketing methods
//! - `StepTol(x)`     : open methods
//!
//! Each [`Algorithm`] variant enforces that only the correct dynamic
//! tolerance type is used via `calculate_tolerance`.


use crate::root_finding::errors::ToleranceError;
use crate::root_finding::algorithms::Algorithm;
use crate::primitives::float::mixed_tolerance;


/// Bracketing methods use DynamicTolerance::WidthTol
/// Open methods       use DynamicTolerance::StepTol
/// Compound methods   use both
#[derive(Debug, Copy, Clone)]
pub(crate) enum DynamicTolerance {
    WidthTol { a: f64, b: f64 },
    StepTol  { x: f64 },
}


impl Algorithm {
    /// Compute the method-specific dynamic tolerance for an algorithm.
    /// - [`Algorithm::Bracket`] methods ([`DynamicTolerance::WidthTol`]):
    ///   `abs_x + rel_x * max(|a|, |b|)`
    /// - [`Algorithm::Open`] methods ([`DynamicTolerance::StepTol`]):
    ///   `abs_x + rel_x * |x_{k+1}|`
    /// - [`Algorithm::Compound`] methods can do both
    ///
    /// # Errors
    /// - Returns a [`ToleranceError`] if the tolerance type does not
    ///   match the algorithm type (e.g. width tolerance for an open method)
    ///   or if the result is invalid (non-finite or < 0).
    pub(crate) fn calculate_tolerance(
        &self,
        dynamic_tol : &DynamicTolerance,
        abs_x   : f64,
        rel_x   : f64
    ) -> Result<f64, ToleranceError> {

        let calculated_tol = match (self, dynamic_tol) {
            (
                Algorithm::Bracket(..) | Algorithm::Compound(..),
                DynamicTolerance::WidthTol { a, b }
            )
            => mixed_tolerance(a.abs().max(b.abs()), abs_x, rel_x),

            (
                Algorithm::Open(..) | Algorithm::Compound(..),
                DynamicTolerance::StepTol { x }
            )
            => mixed_tolerance(*x, abs_x, rel_x),

            (_, DynamicTolerance::WidthTol { .. })
            => return Err(ToleranceError::WidthTolNotApplicable { algorithm: *self }),

            (_, DynamicTolerance::StepTol { .. })
            => return Err(ToleranceError::StepTolNotApplicable { algorithm: *self }),
        };

        if calculated_tol < 0.0 || !calculated_tol.is_finite() {
            return Err(ToleranceError::InvalidTolerance { got: calculated_tol });
        }

        Ok(calculated_tol)
    }
}
