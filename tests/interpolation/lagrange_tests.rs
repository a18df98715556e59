use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::lagrange::{interpolate, LagrangeCfg, LagrangePolynomial};
use numeth::interpolation::newton::NewtonPolynomial;
use numeth::interpolation::Interpolator;
use proptest::prelude::*;

type TestResult = Result<(), InterpolationError>;

#[test]
fn quadratic_through_three_points() -> TestResult {
    let cfg = LagrangeCfg::new()
        .set_x(&[0.0, 1.0, 2.0])?
        .set_y(&[1.0, 3.0, 7.0])?
        .set_x_eval(&[0.5, 1.5, 2.0])?;

    // y = x^2 + x + 1
    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "lagrange");
    assert_abs_diff_eq!(rep.evaluated[0], 1.75, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.evaluated[1], 4.75, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.evaluated[2], 7.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn derivative_of_cubic() -> TestResult {
    let x = [-1.0, 0.0, 1.0, 2.0];
    let y: Vec<f64> = x.iter().map(|&t| t * t * t - 2.0 * t).collect();
    let p = LagrangePolynomial::new(&x, &y)?;

    assert_abs_diff_eq!(p.derivative(0.5)?, -1.25, epsilon = 1e-12);
    assert_abs_diff_eq!(p.derivative(-1.0)?, 1.0, epsilon = 1e-12);
    assert_eq!(p.domain(), (-1.0, 2.0));
    Ok(())
}

#[test]
fn non_finite_query() -> TestResult {
    let p = LagrangePolynomial::new(&[0.0, 1.0], &[0.0, 1.0])?;
    assert!(matches!(p.eval(f64::NAN), Err(InterpolationError::NonFiniteQuery { .. })));
    Ok(())
}

proptest! {
    #[test]
    fn lagrange_matches_newton(
        offsets in prop::collection::vec(0.0..0.5f64, 2..8),
        ys      in prop::collection::vec(-10.0..10.0f64, 8),
        t       in 0.0..1.0f64,
    ) {
        let n = offsets.len();
        let x: Vec<f64> = offsets.iter().enumerate().map(|(k, o)| k as f64 + o).collect();
        let y = &ys[..n];
        let xq = x[0] + t * (x[n - 1] - x[0]);

        let lagrange = LagrangePolynomial::new(&x, y).unwrap();
        let newton   = NewtonPolynomial::new(&x, y).unwrap();

        let a = lagrange.eval(xq).unwrap();
        let b = newton.eval(xq).unwrap();
        prop_assert!((a - b).abs() <= 1e-10 * a.abs().max(1.0), "{a} vs {b}");
    }
}
