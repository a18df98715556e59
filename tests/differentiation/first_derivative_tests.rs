use approx::{assert_abs_diff_eq, assert_relative_eq};
use numeth::differentiation::{first_derivative, DerivativeCfg, DifferentiationError, Scheme};

type TestResult = Result<(), DifferentiationError>;

#[test]
fn central_is_the_default() -> TestResult {
    let rep = first_derivative(f64::sin, 1.0, DerivativeCfg::new())?;

    assert_eq!(rep.algorithm_name, "central difference");
    assert_abs_diff_eq!(rep.value, 1.0_f64.cos(), epsilon = 1e-9);
    assert_eq!(rep.evaluations, 4);
    assert!(rep.estimated_error < 1e-8);
    Ok(())
}

#[test]
fn one_sided_schemes() -> TestResult {
    let fwd = first_derivative(f64::ln, 1.0, DerivativeCfg::new().set_scheme(Scheme::Forward))?;
    let bwd = first_derivative(f64::ln, 1.0, DerivativeCfg::new().set_scheme(Scheme::Backward))?;

    assert_abs_diff_eq!(fwd.value, 1.0, epsilon = 5e-7);
    assert_abs_diff_eq!(bwd.value, 1.0, epsilon = 5e-7);
    assert_eq!(fwd.algorithm_name, "forward difference");
    assert_eq!(bwd.algorithm_name, "backward difference");
    Ok(())
}

#[test]
fn richardson_is_most_accurate() -> TestResult {
    let cfg = DerivativeCfg::new().set_scheme(Scheme::Richardson);
    let rep = first_derivative(f64::exp, 0.5, cfg)?;

    assert_abs_diff_eq!(rep.value, 0.5_f64.exp(), epsilon = 1e-11);
    assert_eq!(rep.evaluations, 8);
    Ok(())
}

#[test]
fn error_estimate_tracks_truncation() -> TestResult {
    let cfg = DerivativeCfg::new().set_step(0.1)?;
    let rep = first_derivative(f64::exp, 0.0, cfg)?;

    assert_eq!(rep.step, 0.1);
    assert_relative_eq!(rep.estimated_error, (rep.value - 1.0).abs(), max_relative = 0.01);
    Ok(())
}

#[test]
fn forward_difference_near_a_domain_boundary() -> TestResult {
    // undefined left of zero
    let f = |x: f64| if x < 0.0 { f64::NAN } else { x * x };

    let err = first_derivative(f, 0.0, DerivativeCfg::new()).unwrap_err();
    assert!(matches!(err, DifferentiationError::NonFiniteEvaluation { .. }));

    let rep = first_derivative(f, 0.0, DerivativeCfg::new().set_scheme(Scheme::Forward))?;
    assert_abs_diff_eq!(rep.value, 0.0, epsilon = 1e-7);
    Ok(())
}

#[test]
fn invalid_inputs() {
    assert_eq!(
        DerivativeCfg::new().set_step(0.0).unwrap_err(),
        DifferentiationError::InvalidStep { got: 0.0 }
    );
    assert!(DerivativeCfg::new().set_step(f64::NAN).is_err());

    let err = first_derivative(f64::sin, f64::INFINITY, DerivativeCfg::new()).unwrap_err();
    assert!(matches!(err, DifferentiationError::NonFiniteX { .. }));
}

#[test]
fn step_lost_in_round_off() -> TestResult {
    let cfg = DerivativeCfg::new().set_step(1e-3)?;
    let err = first_derivative(|x| x, 1e20, cfg).unwrap_err();
    assert!(matches!(err, DifferentiationError::StepUnderflow { .. }));

    // the automatic step scales with |x|
    let rep = first_derivative(|x| 3.0 * x, 1e20, cfg.with_auto_step())?;
    assert_relative_eq!(rep.value, 3.0, max_relative = 1e-6);
    Ok(())
}
