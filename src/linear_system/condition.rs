//! 1-norm condition number `κ₁(A) = ||A||₁ · ||A⁻¹||₁`.

use crate::linear_system::config::PivotCfg;
use crate::linear_system::errors::LinearSystemError;
use crate::linear_system::lu::LuFactorization;
use crate::primitives::Matrix;


/// Exact `κ₁` from the explicit inverse; `O(n^3)`.
///
/// # Errors
/// Same as [`LuFactorization::new`]; a singular `A` has no finite `κ₁`.
pub fn condition_number_1(a: &Matrix, cfg: PivotCfg) -> Result<f64, LinearSystemError> {
    let inv = LuFactorization::new(a, cfg)?.inverse()?;
    Ok(a.norm1() * inv.norm1())
}
