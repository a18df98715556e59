use approx::assert_relative_eq;
use numeth::primitives::errors::ToleranceError as BaseToleranceError;
use numeth::root_finding::newton::{newton, NewtonCfg, NewtonError};
use numeth::root_finding::errors::ToleranceError;
use numeth::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_within_a_handful_of_iterations() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, df, 1.0, NewtonCfg::new())?;

    assert!(res.converged());
    assert!(res.iterations <= 6);
    assert_relative_eq!(res.root, 1.414_213_56, epsilon = 1e-8);
    assert_relative_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(res.algorithm_name, "newton");
    // one f and one f' per iteration plus f(x0)
    assert_eq!(res.evaluations, 2 * res.iterations + 1);
    Ok(())
}

#[test]
fn step_tolerance_stops_iteration() -> TestResult {
    let cfg = NewtonCfg::new()
        .set_abs_fx(1e-300)?
        .set_abs_x(1e-4)?
        .set_rel_x(0.0)?;

    let res = newton(|x| x.cos() - x, |x| -x.sin() - 1.0, 1.0, cfg)?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_eq!(res.iterations, 3);
    assert!(res.estimated_error <= 1e-4);
    assert_relative_eq!(res.root, 0.739_085_133_215_160_6, max_relative = 1e-9);
    Ok(())
}

#[test]
fn zero_derivative_is_divergence() {
    let err = newton(|x| x * x - 2.0, |_| 0.0, 1.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::Divergence { x, dfx } if x == 1.0 && dfx == 0.0));

    // f'(0) = 0 for f = x^2 - 2
    let err = newton(|x| x * x - 2.0, |x| 2.0 * x, 0.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::Divergence { .. }));
}

#[test]
fn derivative_threshold_is_configurable() -> TestResult {
    let cfg = NewtonCfg::new().set_min_derivative(1.0)?;
    let err = newton(|x| x * x - 2.0, |x| 2.0 * x, 0.25, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::Divergence { .. }));
    Ok(())
}

#[test]
fn iteration_limit_returns_last_iterate() -> TestResult {
    let cfg = NewtonCfg::new().set_max_iter(2)?;
    let res = newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, cfg)?;

    assert!(!res.converged());
    assert_eq!(res.iterations, 2);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_relative_eq!(res.root, 17.0 / 12.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn max_step_clips_each_update() -> TestResult {
    let cfg = NewtonCfg::new().set_max_step(10.0)?;
    let res = newton(|x| x - 100.0, |_| 1.0, 0.0, cfg)?;

    assert_eq!(res.iterations, 10);
    assert_eq!(res.root, 100.0);
    Ok(())
}

#[test]
fn invalid_settings_are_rejected() {
    assert!(matches!(
        NewtonCfg::new().set_max_step(0.0),
        Err(NewtonError::InvalidMaxStep { .. })
    ));
    assert!(matches!(
        NewtonCfg::new().set_min_derivative(-1.0),
        Err(NewtonError::InvalidMinDerivative { .. })
    ));
    assert!(matches!(
        NewtonCfg::new().set_abs_x(-1.0),
        Err(ToleranceError::Base(BaseToleranceError::InvalidAbsTol { .. }))
    ));
    assert!(matches!(
        NewtonCfg::new().set_abs_fx(0.0),
        Err(ToleranceError::InvalidAbsFx { .. })
    ));
    assert!(matches!(
        NewtonCfg::new().set_max_iter(0),
        Err(ToleranceError::Base(BaseToleranceError::InvalidMaxIter { got: 0 }))
    ));
}

#[test]
fn non_finite_guess_is_rejected() {
    let err = newton(|x| x, |_| 1.0, f64::INFINITY, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
}

#[test]
fn early_exit_when_guess_is_root() -> TestResult {
    let res = newton(|x| x - 3.0, |_| 1.0, 3.0, NewtonCfg::new())?;
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}
