use approx::assert_abs_diff_eq;
use numeth::ode::{solve_fixed, FixedStepCfg, FixedStepIntegrator, Method, OdeError};
use numeth::Vector;

type TestResult = Result<(), OdeError>;

fn growth(_t: f64, y: &Vector) -> Vector {
    y.clone()
}

fn error_at_one(method: Method, h: f64) -> Result<f64, OdeError> {
    let cfg = FixedStepCfg::new(1.0, h)?.set_method(method);
    let samples = solve_fixed(growth, 0.0, Vector::from([1.0]), cfg)?;
    let last = samples.last().map_or(f64::NAN, |s| s.y[0]);
    Ok((last - std::f64::consts::E).abs())
}

#[test]
fn rk4_on_exponential_growth() -> TestResult {
    let cfg = FixedStepCfg::new(1.0, 0.01)?;
    let samples = solve_fixed(growth, 0.0, Vector::from([1.0]), cfg)?;

    assert_eq!(samples.len(), 101);
    assert_eq!(samples[0].t, 0.0);
    assert_eq!(samples[0].y[0], 1.0);
    assert_eq!(samples[100].t, 1.0);
    assert_abs_diff_eq!(samples[100].y[0], std::f64::consts::E, epsilon = 5e-10);
    Ok(())
}

#[test]
fn global_error_follows_method_order() -> TestResult {
    for method in [Method::Euler, Method::Heun, Method::Midpoint, Method::Ralston, Method::Rk4] {
        let ratio = error_at_one(method, 0.01)? / error_at_one(method, 0.005)?;
        let expected = 2.0_f64.powi(method.order() as i32);
        assert!(
            (ratio / expected - 1.0).abs() < 0.05,
            "{method}: ratio {ratio}, expected {expected}"
        );
    }
    Ok(())
}

#[test]
fn last_step_is_shortened() -> TestResult {
    let cfg = FixedStepCfg::new(1.0, 0.3)?.set_method(Method::Euler);
    let ts = FixedStepIntegrator::new(growth, 0.0, Vector::from([1.0]), cfg)?
        .map(|s| s.t)
        .collect::<Vec<_>>();

    assert_eq!(ts.len(), 5);
    for (t, e) in ts.iter().zip([0.0, 0.3, 0.6, 0.9]) {
        assert_abs_diff_eq!(*t, e, epsilon = 1e-15);
    }
    assert_eq!(ts[4], 1.0);
    Ok(())
}

#[test]
fn harmonic_oscillator_returns_after_one_period() -> TestResult {
    let period = 2.0 * std::f64::consts::PI;
    let cfg = FixedStepCfg::new(period, 0.01)?;
    let f = |_t: f64, y: &Vector| Vector::from([y[1], -y[0]]);

    let samples = solve_fixed(f, 0.0, Vector::from([1.0, 0.0]), cfg)?;
    let last = &samples[samples.len() - 1];
    assert_eq!(last.t, period);
    assert_abs_diff_eq!(last.y[0], 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(last.y[1], 0.0, epsilon = 1e-8);
    Ok(())
}

#[test]
fn restart_and_clone_replay_the_trajectory() -> TestResult {
    let cfg = FixedStepCfg::new(1.0, 0.1)?;
    let mut it = FixedStepIntegrator::new(growth, 0.0, Vector::from([1.0]), cfg)?;

    let head = it.by_ref().take(4).collect::<Vec<_>>();
    let fork = it.clone();
    let rest = it.by_ref().collect::<Vec<_>>();
    assert_eq!(fork.collect::<Vec<_>>(), rest);
    assert_eq!(it.steps(), 10);
    assert_eq!(it.evaluations(), 40);

    it.restart();
    let replay = it.collect::<Vec<_>>();
    assert_eq!(replay[..4], head[..]);
    assert_eq!(replay[4..], rest[..]);
    Ok(())
}

#[test]
fn empty_interval_yields_initial_sample() -> TestResult {
    let cfg = FixedStepCfg::new(2.0, 0.1)?;
    let samples = solve_fixed(growth, 2.0, Vector::from([3.0]), cfg)?;
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].y[0], 3.0);
    Ok(())
}

#[test]
fn right_hand_side_failures() -> TestResult {
    let cfg = FixedStepCfg::new(1.0, 0.1)?;
    let short = |_t: f64, _y: &Vector| Vector::from([0.0]);
    assert_eq!(
        solve_fixed(short, 0.0, Vector::from([1.0, 2.0]), cfg).unwrap_err(),
        OdeError::DimensionMismatch { expected: 2, got: 1 }
    );

    // y' = y^2 blows up at t = 1; explicit Euler overflows a little later
    let cfg = FixedStepCfg::new(3.0, 0.1)?.set_method(Method::Euler);
    let mut it = FixedStepIntegrator::new(|_t, y: &Vector| Vector::from([y[0] * y[0]]), 0.0, Vector::from([1.0]), cfg)?;
    let n = it.by_ref().count();
    assert!(n < 31);
    assert!(matches!(it.error(), Some(OdeError::NonFiniteState { .. })));
    Ok(())
}

#[test]
fn invalid_problems() {
    assert_eq!(FixedStepCfg::new(1.0, 0.0).unwrap_err(), OdeError::InvalidStep { got: 0.0 });

    let cfg = FixedStepCfg::new(-1.0, 0.1).unwrap();
    assert!(matches!(
        FixedStepIntegrator::new(growth, 0.0, Vector::from([1.0]), cfg),
        Err(OdeError::InvalidInterval { .. })
    ));

    let cfg = FixedStepCfg::new(1.0, 0.1).unwrap();
    assert!(matches!(
        FixedStepIntegrator::new(growth, 0.0, Vector::zeros(0), cfg),
        Err(OdeError::InvalidInitialState)
    ));
}
