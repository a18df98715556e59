//! Fixed-step explicit Runge–Kutta integration.
//!
//! Step `k` ends at `t0 + k h` (no accumulated drift); the step that would
//! pass `t_end` is shortened to end on it exactly.

use crate::ode::config::FixedStepCfg;
use crate::ode::errors::OdeError;
use crate::ode::sample::Sample;
use crate::ode::tableau::rk_step;
use crate::primitives::Vector;


/// Relative slack, in units of `h`, for treating a grid point as `t_end`.
const END_SLACK: f64 = 1e-10;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    Start,
    Running,
    Done,
}


/// Validates `(t0, t_end, y0)` for both integrators.
pub(crate) fn check_problem(t0: f64, t_end: f64, y0: &Vector) -> Result<(), OdeError> {
    if !t0.is_finite() || !t_end.is_finite() || t_end < t0 {
        return Err(OdeError::InvalidInterval { t0, t_end });
    }
    if y0.is_empty() || !y0.is_finite() {
        return Err(OdeError::InvalidInitialState);
    }
    Ok(())
}


/// Lazy fixed-step trajectory of `y' = f(t, y)`.
///
/// Yields `(t0, y0)` first. If the right-hand side misbehaves (wrong
/// length, non-finite state) iteration stops and the cause is kept in
/// [`FixedStepIntegrator::error`].
#[derive(Clone)]
pub struct FixedStepIntegrator<F> {
    f:           F,
    t0:          f64,
    y0:          Vector,
    cfg:         FixedStepCfg,
    t:           f64,
    y:           Vector,
    steps:       usize,
    evaluations: usize,
    phase:       Phase,
    error:       Option<OdeError>,
}

impl<F: Fn(f64, &Vector) -> Vector> FixedStepIntegrator<F> {
    pub fn new(f: F, t0: f64, y0: Vector, cfg: FixedStepCfg) -> Result<Self, OdeError> {
        check_problem(t0, cfg.t_end(), &y0)?;
        Ok(Self {
            f,
            t0,
            y: y0.clone(),
            y0,
            cfg,
            t:           t0,
            steps:       0,
            evaluations: 0,
            phase:       Phase::Start,
            error:       None,
        })
    }

    /// Rewinds to `(t0, y0)`.
    pub fn restart(&mut self) {
        self.t           = self.t0;
        self.y           = self.y0.clone();
        self.steps       = 0;
        self.evaluations = 0;
        self.phase       = Phase::Start;
        self.error       = None;
    }

    #[inline] #[must_use] pub fn steps(&self) -> usize { self.steps }
    #[inline] #[must_use] pub fn evaluations(&self) -> usize { self.evaluations }
    #[inline] #[must_use] pub fn error(&self) -> Option<&OdeError> { self.error.as_ref() }

    fn fail(&mut self, e: OdeError) -> Option<Sample> {
        tracing::warn!(error = %e, t = self.t, "fixed-step integration stopped");
        self.error = Some(e);
        self.phase = Phase::Done;
        None
    }
}

impl<F: Fn(f64, &Vector) -> Vector> Iterator for FixedStepIntegrator<F> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        match self.phase {
            Phase::Done => None,
            Phase::Start => {
                self.phase = if self.t < self.cfg.t_end() { Phase::Running } else { Phase::Done };
                Some(Sample { t: self.t, y: self.y.clone() })
            }
            Phase::Running => {
                let (h, t_end) = (self.cfg.step(), self.cfg.t_end());
                let mut t_next = self.t0 + (self.steps + 1) as f64 * h;
                let last = t_next >= t_end - END_SLACK * h;
                if last {
                    t_next = t_end;
                }

                let method = self.cfg.method();
                let tab = method.tableau();
                let y_next = match rk_step(tab, &self.f, self.t, &self.y, t_next - self.t) {
                    Ok((y, _)) => y,
                    Err(e) => return self.fail(e),
                };
                self.evaluations += tab.stages();
                if !y_next.is_finite() {
                    return self.fail(OdeError::NonFiniteState { t: t_next });
                }

                self.t = t_next;
                self.y = y_next;
                self.steps += 1;
                tracing::trace!(method = method.method_name(), t = self.t, "step");

                if last {
                    self.phase = Phase::Done;
                    tracing::debug!(
                        method = method.method_name(),
                        steps = self.steps,
                        evaluations = self.evaluations,
                        "fixed-step integration finished"
                    );
                }
                Some(Sample { t: self.t, y: self.y.clone() })
            }
        }
    }
}


/// Collects the whole fixed-step trajectory from `t0` to `cfg.t_end()`.
pub fn solve_fixed<F: Fn(f64, &Vector) -> Vector>(
    f: F,
    t0: f64,
    y0: Vector,
    cfg: FixedStepCfg,
) -> Result<Vec<Sample>, OdeError> {
    let mut it = FixedStepIntegrator::new(f, t0, y0, cfg)?;
    let samples = it.by_ref().collect::<Vec<_>>();
    match it.error() {
        Some(e) => Err(e.clone()),
        None => Ok(samples),
    }
}
