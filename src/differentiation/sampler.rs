use crate::differentiation::errors::DifferentiationError;


/// Wraps the user function, counting calls and tracking `max |f|` for the
/// round-off term.
pub(crate) struct Sampler<F> {
    f:           F,
    evaluations: usize,
    f_scale:     f64,
}

impl<F: FnMut(f64) -> f64> Sampler<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f, evaluations: 0, f_scale: 0.0 }
    }

    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, DifferentiationError> {
        let fx = (self.f)(x);
        self.evaluations += 1;
        if !fx.is_finite() {
            return Err(DifferentiationError::NonFiniteEvaluation { x, fx });
        }
        self.f_scale = self.f_scale.max(fx.abs());
        Ok(fx)
    }

    pub(crate) fn evaluations(&self) -> usize { self.evaluations }
    pub(crate) fn f_scale(&self) -> f64 { self.f_scale }
}
