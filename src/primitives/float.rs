//! Floating-point comparison and accuracy utilities.
//!
//! - `approx_eq`          : mixed absolute/relative equality test
//! - `mixed_tolerance`    : `abs_tol + rel_tol * |x|`
//! - `absolute_error`     : `|computed - expected|`
//! - `relative_error`     : `|computed - expected| / |expected|`
//! - `significant_digits` : number of correct base-`b` digits
//! - `next_up/next_down`  : neighbouring representable values


/// Number of base-2 digits carried by an `f64` significand.
pub const F64_DIGITS: i32 = f64::MANTISSA_DIGITS as i32;


/// Returns `true` if `|a - b| <= abs_tol + rel_tol * max(|a|, |b|)`.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    if a == b { return true; }
    (a - b).abs() <= abs_tol + rel_tol * a.abs().max(b.abs())
}


/// Mixed tolerance `abs_tol + rel_tol * |x|` used by every stopping rule.
#[inline]
#[must_use]
pub fn mixed_tolerance(x: f64, abs_tol: f64, rel_tol: f64) -> f64 {
    abs_tol + rel_tol * x.abs()
}


#[inline]
#[must_use]
pub fn absolute_error(expected: f64, computed: f64) -> f64 {
    (computed - expected).abs()
}


/// Relative error of `computed` with respect to `expected`.
///
/// - both zero     : `0.0`
/// - expected zero : `f64::INFINITY`
#[must_use]
pub fn relative_error(expected: f64, computed: f64) -> f64 {
    if expected == 0.0 && computed == 0.0 {
        0.0
    } else if expected == 0.0 {
        f64::INFINITY
    } else {
        (computed - expected).abs() / expected.abs()
    }
}


/// Number of base-`base` digits shared by `expected` and `computed`.
///
/// Clamped to `[0, d_max]` where `d_max = 53 * ln(2) / ln(base)` is the
/// precision of an `f64`; an exact match returns `d_max`.
#[must_use]
pub fn significant_digits(expected: f64, computed: f64, base: f64) -> f64 {
    let d_max  = f64::from(F64_DIGITS) * 2.0_f64.ln() / base.ln();
    let relerr = relative_error(expected, computed);
    if relerr == 0.0 {
        return d_max;
    }

    (-relerr.ln() / base.ln()).clamp(0.0, d_max)
}


/// Smallest representable `f64` strictly greater than `x`.
#[inline]
#[must_use]
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal
    if x == 0.0 { return f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(bumped)
}


/// Largest representable `f64` strictly less than `x`.
#[inline]
#[must_use]
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}


/// Returns the first index holding a NaN or infinite value.
#[inline]
pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
