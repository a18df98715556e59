use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::spline::clamped::{interpolate, ClampedSplineCfg};
use numeth::interpolation::spline::CubicSpline;
use numeth::interpolation::Interpolator;

type TestResult = Result<(), InterpolationError>;

fn assert_all_close(a: &[f64], b: &[f64], eps: f64) {
    assert_eq!(a.len(), b.len());
    for (ai, bi) in a.iter().zip(b) {
        assert_abs_diff_eq!(*ai, *bi, epsilon = eps);
    }
}

#[test]
fn report_metadata() -> TestResult {
    // y = x^2, y' = 2x
    let cfg = ClampedSplineCfg::new(0.0, 4.0)
        .set_x(&[0.0, 1.0, 2.0])?
        .set_y(&[0.0, 1.0, 4.0])?
        .set_x_eval(&[0.5, 1.5])?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "clamped cubic spline");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_all_close(&rep.evaluated, &[0.25, 2.25], 1e-12);
    Ok(())
}

#[test]
fn reproduces_a_cubic_with_exact_end_slopes() -> TestResult {
    // y = x^3 - 2x + 1, y' = 3x^2 - 2
    let f = |t: f64| t * t * t - 2.0 * t + 1.0;
    let x = [0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&t| f(t)).collect();
    let x_eval = [0.0, 0.25, 1.5, 2.75, 3.0];
    let expected: Vec<f64> = x_eval.iter().map(|&t| f(t)).collect();

    let cfg = ClampedSplineCfg::new(-2.0, 25.0)
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &expected, 1e-12);
    Ok(())
}

#[test]
fn end_slopes_are_honoured() -> TestResult {
    let x = [0.0, 1.0, 2.5, 4.0];
    let y = [1.0, -1.0, 0.5, 2.0];
    let s = CubicSpline::clamped(&x, &y, 0.75, -1.5)?;

    assert_eq!(s.slopes()[0], 0.75);
    assert_eq!(s.slopes()[3], -1.5);
    assert_abs_diff_eq!(s.derivative(0.0)?, 0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(s.derivative(4.0)?, -1.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn constant_function() -> TestResult {
    let x = [0.0, 0.2, 1.1, 3.7, 5.0];
    let cfg = ClampedSplineCfg::new(0.0, 0.0)
        .set_x(&x)?
        .set_y(&[2.5; 5])?
        .set_x_eval(&[-0.0, 0.2, 1.0, 2.5, 3.7, 5.0])?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &[2.5; 6], 1e-12);
    Ok(())
}

#[test]
fn two_points_with_secant_slopes() -> TestResult {
    let x = [2.0, 5.0];
    let y = [7.0, 1.0];
    let m = (y[1] - y[0]) / (x[1] - x[0]);

    let cfg = ClampedSplineCfg::new(m, m)
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[2.0, 3.0, 4.0, 5.0])?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &[7.0, 5.0, 3.0, 1.0], 1e-12);
    Ok(())
}

#[test]
fn non_finite_slope_rejected() {
    let err = ClampedSplineCfg::new(0.0, 0.0).set_slope_start(f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteSlope { .. }));

    let err = CubicSpline::clamped(&[0.0, 1.0], &[0.0, 1.0], 0.0, f64::INFINITY).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteSlope { got: f64::INFINITY });
}

#[test]
fn slope_setters() -> TestResult {
    let cfg = ClampedSplineCfg::new(0.0, 0.0)
        .set_slope_start(1.0)?
        .set_slope_final(-1.0)?;
    assert_eq!((cfg.slope_start(), cfg.slope_final()), (1.0, -1.0));
    Ok(())
}
