use crate::quadrature::errors::QuadratureError;


/// Checks `a`, `b` and orients them: returns `(lo, hi, sign)`.
pub(crate) fn oriented(a: f64, b: f64) -> Result<(f64, f64, f64), QuadratureError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(QuadratureError::InvalidInterval { a, b });
    }
    Ok(if a <= b { (a, b, 1.0) } else { (b, a, -1.0) })
}


/// Counting, finiteness-checking wrapper around the integrand.
pub(crate) struct Integrand<F> {
    f:                  F,
    pub(crate) evaluations: usize,
}

impl<F: FnMut(f64) -> f64> Integrand<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f, evaluations: 0 }
    }

    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, QuadratureError> {
        let fx = (self.f)(x);
        self.evaluations += 1;
        if !fx.is_finite() {
            return Err(QuadratureError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }
}
