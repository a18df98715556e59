//! Hessian of `f: R^n -> R` by central differences.
//!
//! ```text
//! H[i][i] = (f(x + h_i e_i) - 2 f(x) + f(x - h_i e_i)) / h_i^2
//! H[i][j] = (f(x + h_i e_i + h_j e_j) - f(x + h_i e_i - h_j e_j)
//!          - f(x - h_i e_i + h_j e_j) + f(x - h_i e_i - h_j e_j)) / (4 h_i h_j)
//! ```
//!
//! Only the upper triangle is sampled; the result is symmetric by
//! construction.

use crate::differentiation::algorithms::Scheme;
use crate::differentiation::config::HessianCfg;
use crate::differentiation::errors::DifferentiationError;
use crate::differentiation::finite_difference::realised_step;
use crate::differentiation::report::HessianReport;
use crate::primitives::float::non_finite_idx;
use crate::primitives::{Matrix, Vector};


struct Probe<'a, F> {
    f:           &'a F,
    x:           &'a Vector,
    point:       Vector,
    evaluations: usize,
}

impl<F: Fn(&Vector) -> f64> Probe<'_, F> {
    /// `f(x + Σ shifts)`
    fn eval(&mut self, shifts: &[(usize, f64)]) -> Result<f64, DifferentiationError> {
        for &(i, d) in shifts {
            self.point[i] = self.x[i] + d;
        }
        let fx = (self.f)(&self.point);
        for &(i, _) in shifts {
            self.point[i] = self.x[i];
        }
        self.evaluations += 1;
        if !fx.is_finite() {
            return Err(DifferentiationError::NonFiniteObjective { fx });
        }
        Ok(fx)
    }
}


/// Central-difference Hessian `∇²f(x)` with `1 + 2n + 2n(n-1)` evaluations.
pub fn hessian<F: Fn(&Vector) -> f64>(
    f: F,
    x: &Vector,
    cfg: HessianCfg,
) -> Result<HessianReport, DifferentiationError> {
    if x.is_empty() {
        return Err(DifferentiationError::EmptyPoint);
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(DifferentiationError::NonFiniteX { got: x[idx] });
    }

    let n = x.len();
    let steps = x
        .iter()
        .map(|&xi| realised_step(xi, cfg.common().step_at(Scheme::Central, 2, xi)))
        .collect::<Result<Vector, _>>()?;

    let mut probe = Probe { f: &f, x, point: x.clone(), evaluations: 0 };
    let f0 = probe.eval(&[])?;

    let mut hess = Matrix::zeros(n, n);
    for i in 0..n {
        let hi = steps[i];
        let fp = probe.eval(&[(i, hi)])?;
        let fm = probe.eval(&[(i, -hi)])?;
        hess[(i, i)] = (fp - 2.0 * f0 + fm) / (hi * hi);

        for j in i + 1..n {
            let hj = steps[j];
            let fpp = probe.eval(&[(i, hi), (j, hj)])?;
            let fpm = probe.eval(&[(i, hi), (j, -hj)])?;
            let fmp = probe.eval(&[(i, -hi), (j, hj)])?;
            let fmm = probe.eval(&[(i, -hi), (j, -hj)])?;
            let hij = (fpp - fpm - fmp + fmm) / (4.0 * hi * hj);
            hess[(i, j)] = hij;
            hess[(j, i)] = hij;
        }
    }

    tracing::trace!(dim = n, evaluations = probe.evaluations, "hessian estimated");
    Ok(HessianReport {
        hessian:        hess,
        steps,
        evaluations:    probe.evaluations,
        algorithm_name: Scheme::Central.scheme_name(),
    })
}
