use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::spline::not_a_knot::{interpolate, NotAKnotSplineCfg};
use numeth::interpolation::spline::CubicSpline;
use numeth::interpolation::{Algorithm, Interpolator};

type TestResult = Result<(), InterpolationError>;

fn cubic(t: f64) -> f64 { t * t * t - 2.0 * t * t + 1.0 }

#[test]
fn reproduces_a_cubic() -> TestResult {
    let x = [0.0, 0.5, 1.7, 2.0, 3.1];
    let y: Vec<f64> = x.iter().map(|&t| cubic(t)).collect();
    let x_eval: Vec<f64> = (0..=40).map(|k| -0.5 + 4.0 * k as f64 / 40.0).collect();

    let cfg = NotAKnotSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "not-a-knot cubic spline");
    for (&xq, &v) in x_eval.iter().zip(&rep.evaluated) {
        assert_abs_diff_eq!(v, cubic(xq), epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn slopes_are_exact_for_a_cubic() -> TestResult {
    let x = [0.0, 0.5, 1.7, 2.0, 3.1];
    let y: Vec<f64> = x.iter().map(|&t| cubic(t)).collect();
    let s = CubicSpline::not_a_knot(&x, &y)?;

    for (&xi, &m) in x.iter().zip(s.slopes()) {
        assert_abs_diff_eq!(m, 3.0 * xi * xi - 4.0 * xi, epsilon = 1e-12);
    }
    assert_eq!(s.algorithm(), Algorithm::SplineNotAKnot);
    Ok(())
}

#[test]
fn three_points_give_the_parabola() -> TestResult {
    // y = x^2 - 3x
    let s = CubicSpline::not_a_knot(&[0.0, 1.0, 3.0], &[0.0, -2.0, 0.0])?;

    assert_abs_diff_eq!(s.eval(2.0)?, -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.eval(4.0)?, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.second_derivative(0.3)?, 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn two_points_give_the_line() -> TestResult {
    let s = CubicSpline::not_a_knot(&[1.0, 3.0], &[2.0, 6.0])?;

    assert_abs_diff_eq!(s.eval(2.0)?, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.derivative(0.0)?, 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn third_derivative_continuous_at_second_node() -> TestResult {
    let x = [0.0, 1.0, 2.5, 3.0, 4.5, 6.0];
    let y = [1.0, 0.0, 2.0, -1.0, 0.5, 3.0];
    let s = CubicSpline::not_a_knot(&x, &y)?;

    // S'' is linear on each piece; equal slopes of S'' on the first two pieces
    let third = |a: f64, b: f64| -> Result<f64, InterpolationError> {
        Ok((s.second_derivative(b)? - s.second_derivative(a)?) / (b - a))
    };
    assert_abs_diff_eq!(third(0.1, 0.9)?, third(1.1, 2.4)?, epsilon = 1e-9);
    assert_abs_diff_eq!(third(3.1, 4.4)?, third(4.6, 5.9)?, epsilon = 1e-9);
    Ok(())
}
