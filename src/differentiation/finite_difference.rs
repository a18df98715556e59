//! Scalar finite differences.
//!
//! Both entry points evaluate the chosen stencil at the realised step `h`
//! and again at `2h`. With truncation order `p` and derivative order `d`:
//!
//! ```text
//! estimated_error = |D(h) - D(2h)| / (2^p - 1)  +  ε max|f| / h^d
//! ```
//!
//! The realised step `h = (x + h) - x` is exactly representable, so `x ± h`
//! are the points actually sampled.


use crate::differentiation::algorithms::Scheme;
use crate::differentiation::config::DerivativeCfg;
use crate::differentiation::errors::DifferentiationError;
use crate::differentiation::report::DerivativeReport;
use crate::differentiation::sampler::Sampler;


type Stencil<F> = fn(&mut Sampler<F>, Scheme, f64, f64) -> Result<f64, DifferentiationError>;


/// `(x + h) - x`, rejected if it rounds to zero.
#[inline]
pub(crate) fn realised_step(x: f64, h: f64) -> Result<f64, DifferentiationError> {
    let realised = (x + h) - x;
    if realised <= 0.0 || !realised.is_finite() {
        return Err(DifferentiationError::StepUnderflow { x, step: h });
    }
    Ok(realised)
}


fn first_stencil<F: FnMut(f64) -> f64>(
    s: &mut Sampler<F>,
    scheme: Scheme,
    x: f64,
    h: f64,
) -> Result<f64, DifferentiationError> {
    Ok(match scheme {
        Scheme::Forward  => (s.eval(x + h)? - s.eval(x)?) / h,
        Scheme::Backward => (s.eval(x)? - s.eval(x - h)?) / h,
        Scheme::Central  => (s.eval(x + h)? - s.eval(x - h)?) / (2.0 * h),
        Scheme::Richardson => {
            let d1 = s.eval(x + h)? - s.eval(x - h)?;
            let d2 = s.eval(x + 2.0 * h)? - s.eval(x - 2.0 * h)?;
            (8.0 * d1 - d2) / (12.0 * h)
        }
    })
}


fn second_stencil<F: FnMut(f64) -> f64>(
    s: &mut Sampler<F>,
    scheme: Scheme,
    x: f64,
    h: f64,
) -> Result<f64, DifferentiationError> {
    let h2 = h * h;
    Ok(match scheme {
        Scheme::Forward => {
            (s.eval(x + 2.0 * h)? - 2.0 * s.eval(x + h)? + s.eval(x)?) / h2
        }
        Scheme::Backward => {
            (s.eval(x)? - 2.0 * s.eval(x - h)? + s.eval(x - 2.0 * h)?) / h2
        }
        Scheme::Central => {
            (s.eval(x + h)? - 2.0 * s.eval(x)? + s.eval(x - h)?) / h2
        }
        Scheme::Richardson => {
            let outer = s.eval(x + 2.0 * h)? + s.eval(x - 2.0 * h)?;
            let inner = s.eval(x + h)? + s.eval(x - h)?;
            (16.0 * inner - outer - 30.0 * s.eval(x)?) / (12.0 * h2)
        }
    })
}


fn estimate<F: FnMut(f64) -> f64>(
    f: F,
    x: f64,
    derivative: i32,
    stencil: Stencil<F>,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, DifferentiationError> {
    if !x.is_finite() {
        return Err(DifferentiationError::NonFiniteX { got: x });
    }

    let scheme = cfg.scheme();
    let h = realised_step(x, cfg.common().step_at(scheme, derivative, x))?;

    let mut sampler = Sampler::new(f);
    let value  = stencil(&mut sampler, scheme, x, h)?;
    let coarse = stencil(&mut sampler, scheme, x, 2.0 * h)?;

    let truncation = (value - coarse).abs() / (2.0_f64.powi(scheme.order()) - 1.0);
    let round_off  = f64::EPSILON * sampler.f_scale() / h.powi(derivative);

    let report = DerivativeReport {
        value,
        estimated_error: truncation + round_off,
        step:            h,
        evaluations:     sampler.evaluations(),
        algorithm_name:  scheme.scheme_name(),
    };

    tracing::trace!(
        algorithm = report.algorithm_name,
        derivative,
        x,
        step = h,
        value,
        estimated_error = report.estimated_error,
        "finite difference"
    );
    Ok(report)
}


/// First derivative `f'(x)`.
///
/// # Errors
/// - [`DifferentiationError::NonFiniteX`] : `x` is NaN or infinite
/// - [`DifferentiationError::StepUnderflow`] : `x + h == x`
/// - [`DifferentiationError::NonFiniteEvaluation`] : `f` returned NaN/inf on the stencil
pub fn first_derivative<F: FnMut(f64) -> f64>(
    f: F,
    x: f64,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, DifferentiationError> {
    estimate(f, x, 1, first_stencil::<F>, cfg)
}


/// Second derivative `f''(x)`. Same errors as [`first_derivative`].
pub fn second_derivative<F: FnMut(f64) -> f64>(
    f: F,
    x: f64,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, DifferentiationError> {
    estimate(f, x, 2, second_stencil::<F>, cfg)
}
