use approx::assert_relative_eq;
use numeth::root_finding::secant::{secant, SecantCfg, SecantError};
use numeth::root_finding::report::TerminationReason;

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let res = secant(|x| x * x - 2.0, 1.0, 2.0, SecantCfg::new())?;

    assert!(res.converged());
    assert!(res.iterations < 10);
    assert_relative_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(res.stencil.stencil().len(), 2);
    Ok(())
}

#[test]
fn finds_cubic_root_from_far_guesses() -> TestResult {
    let cfg = SecantCfg::new().set_abs_x(1e-12)?;
    let res = secant(|x| x.powi(3) - 2.0 * x - 5.0, 3.0, 2.5, cfg)?;

    assert!(res.converged());
    assert_relative_eq!(res.root, 2.094_551_481_542_326_5, epsilon = 1e-11);
    Ok(())
}

#[test]
fn degenerate_secant_is_an_error() {
    // f(-1) == f(1)
    let err = secant(|x| x * x - 2.0, -1.0, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::DegenerateSecantStep { .. }));
}

#[test]
fn equal_guesses_are_rejected() {
    let err = secant(|x| x, 1.0, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));
}

#[test]
fn iteration_limit_is_reported() -> TestResult {
    let cfg = SecantCfg::new().set_max_iter(1)?;
    let res = secant(|x| x * x - 2.0, 1.0, 2.0, cfg)?;

    assert!(!res.converged());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    // line through (1, -1) and (2, 2)
    assert_relative_eq!(res.root, 4.0 / 3.0, epsilon = 1e-15);
    Ok(())
}
