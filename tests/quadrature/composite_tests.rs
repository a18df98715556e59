use approx::{assert_abs_diff_eq, assert_relative_eq};
use numeth::quadrature::{composite, CompositeCfg, QuadratureError, Rule};
use proptest::prelude::*;

type TestResult = Result<(), QuadratureError>;

#[test]
fn simpson_exact_on_a_cubic() -> TestResult {
    let cfg = CompositeCfg::new().set_subintervals(2)?;
    let rep = composite(Rule::Simpson, |x| x * x * x - 2.0 * x + 1.0, 0.0, 2.0, cfg)?;

    assert_abs_diff_eq!(rep.integral, 2.0, epsilon = 1e-14);
    assert_abs_diff_eq!(rep.estimated_error, 0.0, epsilon = 1e-13);
    assert_eq!(rep.algorithm_name, "composite simpson");
    assert_eq!(rep.subintervals, 2);
    Ok(())
}

#[test]
fn evaluation_count() -> TestResult {
    let rep = composite(Rule::Simpson, f64::exp, 0.0, 1.0, CompositeCfg::new())?;
    // n + 1 points, then 2n + 1 points
    assert_eq!(rep.evaluations, 3 * 16 + 2);
    Ok(())
}

#[test]
fn trapezoid_error_estimate() -> TestResult {
    let exact = std::f64::consts::E - 1.0;
    let rep = composite(Rule::Trapezoid, f64::exp, 0.0, 1.0, CompositeCfg::new())?;

    let actual = (rep.integral - exact).abs();
    assert!(actual > 1e-4);
    assert_relative_eq!(rep.estimated_error, actual, max_relative = 0.01);
    Ok(())
}

#[test]
fn simpson_beats_trapezoid_and_midpoint() -> TestResult {
    let exact = 2.0;
    let pi = std::f64::consts::PI;
    let cfg = CompositeCfg::new().set_subintervals(8)?;

    let err = |rule| -> Result<f64, QuadratureError> {
        Ok((composite(rule, f64::sin, 0.0, pi, cfg)?.integral - exact).abs())
    };
    let (m, t, s) = (err(Rule::Midpoint)?, err(Rule::Trapezoid)?, err(Rule::Simpson)?);

    // midpoint error is about half the trapezoid error, with opposite sign
    assert_relative_eq!(t / m, 2.0, max_relative = 0.02);
    assert!(s < m / 20.0);
    Ok(())
}

#[test]
fn midpoint_exact_on_lines() -> TestResult {
    let rep = composite(Rule::Midpoint, |x| 3.0 * x - 1.0, 1.0, 3.0, CompositeCfg::new())?;
    assert_abs_diff_eq!(rep.integral, 10.0, epsilon = 1e-13);
    Ok(())
}

#[test]
fn gauss_legendre_degree_of_exactness() -> TestResult {
    let cfg = CompositeCfg::new().set_subintervals(1)?;
    let rep = composite(Rule::GaussLegendre(3), |x| x.powi(5), -1.0, 2.0, cfg)?;

    assert_abs_diff_eq!(rep.integral, 10.5, epsilon = 1e-13);
    assert_eq!(Rule::GaussLegendre(3).degree_of_exactness(), 5);
    Ok(())
}

#[test]
fn gauss_legendre_on_cosine() -> TestResult {
    let cfg = CompositeCfg::new().set_subintervals(4)?;
    let rep = composite(Rule::GaussLegendre(5), f64::cos, 0.0, std::f64::consts::FRAC_PI_2, cfg)?;
    assert_abs_diff_eq!(rep.integral, 1.0, epsilon = 1e-14);
    Ok(())
}

#[test]
fn reversed_and_empty_intervals() -> TestResult {
    let rep = composite(Rule::Simpson, |x| x * x, 2.0, 0.0, CompositeCfg::new())?;
    assert_abs_diff_eq!(rep.integral, -8.0 / 3.0, epsilon = 1e-14);

    let rep = composite(Rule::Simpson, |x| x * x, 1.5, 1.5, CompositeCfg::new())?;
    assert_eq!(rep.integral, 0.0);
    assert_eq!(rep.evaluations, 0);
    Ok(())
}

#[test]
fn invalid_configurations() -> TestResult {
    let f = |x: f64| x;
    let odd = CompositeCfg::new().set_subintervals(3)?;
    assert_eq!(
        composite(Rule::Simpson, f, 0.0, 1.0, odd).unwrap_err(),
        QuadratureError::OddSubintervals { got: 3 }
    );
    assert!(matches!(
        composite(Rule::GaussLegendre(0), f, 0.0, 1.0, CompositeCfg::new()),
        Err(QuadratureError::InvalidGaussPoints { got: 0, .. })
    ));
    assert!(matches!(
        composite(Rule::GaussLegendre(65), f, 0.0, 1.0, CompositeCfg::new()),
        Err(QuadratureError::InvalidGaussPoints { got: 65, .. })
    ));
    assert_eq!(
        CompositeCfg::new().set_subintervals(0).unwrap_err(),
        QuadratureError::InvalidSubintervals { got: 0 }
    );
    assert!(matches!(
        composite(Rule::Trapezoid, f, f64::NAN, 1.0, CompositeCfg::new()),
        Err(QuadratureError::InvalidInterval { .. })
    ));
    Ok(())
}

#[test]
fn singular_integrand() -> TestResult {
    let cfg = CompositeCfg::new().set_subintervals(2)?;
    let err = composite(Rule::Trapezoid, |x| 1.0 / x, -1.0, 1.0, cfg).unwrap_err();
    assert!(matches!(err, QuadratureError::NonFiniteEvaluation { x, .. } if x == 0.0));
    Ok(())
}

proptest! {
    #[test]
    fn simpson_is_exact_for_cubics(
        c in prop::array::uniform4(-5.0..5.0f64),
        a in -3.0..3.0f64,
        len in 0.1..4.0f64,
        half_n in 1usize..10,
    ) {
        let b = a + len;
        let p = |x: f64| ((c[3] * x + c[2]) * x + c[1]) * x + c[0];
        let antiderivative = |x: f64| {
            (((c[3] / 4.0 * x + c[2] / 3.0) * x + c[1] / 2.0) * x + c[0]) * x
        };
        let exact = antiderivative(b) - antiderivative(a);

        let cfg = CompositeCfg::new().set_subintervals(2 * half_n).unwrap();
        let rep = composite(Rule::Simpson, p, a, b, cfg).unwrap();

        let m = a.abs().max(b.abs()).max(1.0);
        let scale = len * c.iter().enumerate().map(|(i, ci)| ci.abs() * m.powi(i as i32)).sum::<f64>();
        prop_assert!((rep.integral - exact).abs() <= 1e-12 * scale.max(1.0),
            "{} vs {}", rep.integral, exact);
    }
}
