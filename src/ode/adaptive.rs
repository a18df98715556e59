//! Adaptive-step Runge–Kutta integration.
//!
//! Every trial step of size `h` yields `y_new` and a local error estimate
//! `e`, scaled per component:
//!
//! ```text
//! err = max_i |e_i| / (abs_tol + rel_tol · max(|y_i|, |y_new_i|))
//! ```
//!
//! `err <= 1` accepts the step. Either way the next trial step is
//! `h · clamp(safety · err^{-1/(q+1)}, min_factor, max_factor)`, `q` being
//! [`AdaptiveMethod::error_order`].

use crate::ode::algorithms::AdaptiveMethod;
use crate::ode::config::AdaptiveCfg;
use crate::ode::errors::OdeError;
use crate::ode::fixed_step::{check_problem, Phase};
use crate::ode::sample::Sample;
use crate::ode::tableau::{rk_step, RK4};
use crate::primitives::Vector;


/// Lazy adaptive trajectory of `y' = f(t, y)`.
///
/// Yields `Ok((t0, y0))` first, then one sample per accepted step. A
/// failure is yielded once as `Err` and ends the iteration.
#[derive(Clone)]
pub struct AdaptiveIntegrator<F> {
    f:           F,
    t0:          f64,
    y0:          Vector,
    cfg:         AdaptiveCfg,
    t:           f64,
    y:           Vector,
    h:           f64,
    accepted:    usize,
    rejected:    usize,
    evaluations: usize,
    phase:       Phase,
}

impl<F: Fn(f64, &Vector) -> Vector> AdaptiveIntegrator<F> {
    pub fn new(f: F, t0: f64, y0: Vector, cfg: AdaptiveCfg) -> Result<Self, OdeError> {
        check_problem(t0, cfg.t_end(), &y0)?;
        Ok(Self {
            f,
            t0,
            y: y0.clone(),
            y0,
            cfg,
            t:           t0,
            h:           Self::first_step(t0, &cfg),
            accepted:    0,
            rejected:    0,
            evaluations: 0,
            phase:       Phase::Start,
        })
    }

    fn first_step(t0: f64, cfg: &AdaptiveCfg) -> f64 {
        cfg.initial_step().unwrap_or((cfg.t_end() - t0) / 100.0)
    }

    /// Rewinds to `(t0, y0)` with the initial trial step.
    pub fn restart(&mut self) {
        self.t           = self.t0;
        self.y           = self.y0.clone();
        self.h           = Self::first_step(self.t0, &self.cfg);
        self.accepted    = 0;
        self.rejected    = 0;
        self.evaluations = 0;
        self.phase       = Phase::Start;
    }

    #[inline] #[must_use] pub fn accepted_steps(&self) -> usize { self.accepted }
    #[inline] #[must_use] pub fn rejected_steps(&self) -> usize { self.rejected }
    #[inline] #[must_use] pub fn evaluations(&self) -> usize { self.evaluations }
    /// Current trial step.
    #[inline] #[must_use] pub fn step_size(&self) -> f64 { self.h }

    /// Trial step: `(y_new, local error estimate)`.
    fn attempt(&mut self, h: f64) -> Result<(Vector, Vector), OdeError> {
        match self.cfg.method() {
            AdaptiveMethod::BogackiShampine => {
                let tab = AdaptiveMethod::BogackiShampine.tableau();
                let (y_new, e) = rk_step(tab, &self.f, self.t, &self.y, h)?;
                self.evaluations += tab.stages();
                Ok((y_new, e.unwrap_or_else(|| Vector::zeros(self.y.len()))))
            }
            AdaptiveMethod::Rk4StepDoubling => {
                let half = 0.5 * h;
                let (full, _) = rk_step(&RK4, &self.f, self.t, &self.y, h)?;
                let (mid, _)  = rk_step(&RK4, &self.f, self.t, &self.y, half)?;
                let (two, _)  = rk_step(&RK4, &self.f, self.t + half, &mid, half)?;
                self.evaluations += 3 * RK4.stages();

                // Richardson: the two half steps are off by (two - full) / 15
                let e = (&two - &full) * (1.0 / 15.0);
                Ok((&two + &e, e))
            }
        }
    }

    fn error_norm(&self, y_new: &Vector, e: &Vector) -> f64 {
        if !y_new.is_finite() || !e.is_finite() {
            return f64::INFINITY;
        }
        let (abs_tol, rel_tol) = (self.cfg.abs_tol(), self.cfg.rel_tol());
        self.y.iter().zip(y_new.iter()).zip(e.iter()).fold(0.0, |acc, ((y, yn), ei)| {
            let scale = abs_tol + rel_tol * y.abs().max(yn.abs());
            let r = if scale > 0.0 {
                ei.abs() / scale
            } else if *ei == 0.0 {
                0.0
            } else {
                f64::INFINITY
            };
            acc.max(r)
        })
    }

    fn step_factor(&self, err: f64) -> f64 {
        let (min, max) = (self.cfg.min_factor(), self.cfg.max_factor());
        if err == 0.0 {
            return max;
        }
        if !err.is_finite() {
            return min;
        }
        let q = f64::from(self.cfg.method().error_order());
        (self.cfg.safety() * err.powf(-1.0 / (q + 1.0))).clamp(min, max)
    }

    fn fail(&mut self, e: OdeError) -> Option<Result<Sample, OdeError>> {
        tracing::warn!(error = %e, t = self.t, h = self.h, "adaptive integration failed");
        self.phase = Phase::Done;
        Some(Err(e))
    }
}

impl<F: Fn(f64, &Vector) -> Vector> Iterator for AdaptiveIntegrator<F> {
    type Item = Result<Sample, OdeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => return None,
            Phase::Start => {
                self.phase = if self.t < self.cfg.t_end() { Phase::Running } else { Phase::Done };
                return Some(Ok(Sample { t: self.t, y: self.y.clone() }));
            }
            Phase::Running => {}
        }

        let t_end = self.cfg.t_end();
        loop {
            if self.accepted + self.rejected >= self.cfg.max_steps() {
                return self.fail(OdeError::MaxSteps { t: self.t, max_steps: self.cfg.max_steps() });
            }
            if self.h < self.cfg.h_min() {
                return self.fail(OdeError::StepSizeUnderflow { t: self.t, h: self.h, h_min: self.cfg.h_min() });
            }

            let remaining = t_end - self.t;
            let last = self.h >= remaining;
            let h = if last { remaining } else { self.h };

            let (y_new, e) = match self.attempt(h) {
                Ok(v) => v,
                Err(err) => return self.fail(err),
            };
            let err = self.error_norm(&y_new, &e);
            let factor = self.step_factor(err);

            if err <= 1.0 {
                self.accepted += 1;
                self.t = if last { t_end } else { self.t + h };
                self.y = y_new;
                self.h = h * factor;
                tracing::trace!(t = self.t, h, err, "step accepted");

                if last {
                    self.phase = Phase::Done;
                    tracing::debug!(
                        method = self.cfg.method().method_name(),
                        accepted = self.accepted,
                        rejected = self.rejected,
                        evaluations = self.evaluations,
                        "adaptive integration finished"
                    );
                }
                return Some(Ok(Sample { t: self.t, y: self.y.clone() }));
            }

            self.rejected += 1;
            self.h = h * factor;
            tracing::trace!(t = self.t, h, err, "step rejected");
        }
    }
}


/// Collects the adaptive trajectory, or the first error.
pub fn solve_adaptive<F: Fn(f64, &Vector) -> Vector>(
    f: F,
    t0: f64,
    y0: Vector,
    cfg: AdaptiveCfg,
) -> Result<Vec<Sample>, OdeError> {
    AdaptiveIntegrator::new(f, t0, y0, cfg)?.collect()
}
