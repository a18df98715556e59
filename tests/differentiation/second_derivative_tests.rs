use approx::assert_abs_diff_eq;
use numeth::differentiation::{second_derivative, DerivativeCfg, DifferentiationError, Scheme};

type TestResult = Result<(), DifferentiationError>;

#[test]
fn central_on_sine() -> TestResult {
    let rep = second_derivative(f64::sin, 1.0, DerivativeCfg::new())?;
    assert_abs_diff_eq!(rep.value, -1.0_f64.sin(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn one_sided_on_exp() -> TestResult {
    for scheme in [Scheme::Forward, Scheme::Backward] {
        let rep = second_derivative(f64::exp, 0.0, DerivativeCfg::new().set_scheme(scheme))?;
        assert_abs_diff_eq!(rep.value, 1.0, epsilon = 1e-4);
    }
    Ok(())
}

#[test]
fn richardson_on_exp() -> TestResult {
    let cfg = DerivativeCfg::new().set_scheme(Scheme::Richardson);
    let rep = second_derivative(f64::exp, 0.0, cfg)?;
    assert_abs_diff_eq!(rep.value, 1.0, epsilon = 1e-8);
    Ok(())
}

#[test]
fn exact_on_quadratics() -> TestResult {
    let cfg = DerivativeCfg::new().set_step(0.5)?;
    let rep = second_derivative(|x| x * x, 1.0, cfg)?;

    assert_eq!(rep.value, 2.0);
    assert!(rep.estimated_error < 1e-13);
    Ok(())
}
