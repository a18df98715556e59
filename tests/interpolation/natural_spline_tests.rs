use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::spline::natural::{interpolate, NaturalSplineCfg};
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
    let cfg = NaturalSplineCfg::new()
        .set_x(&[0.0, 1.0, 2.0])?
        .set_y(&[0.0, 1.0, 4.0])?
        .set_x_eval(&[0.5, 1.5])?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "natural cubic spline");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    Ok(())
}

#[test]
fn exact_hits() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];
    let cfg = NaturalSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &y, 1e-12);
    Ok(())
}

#[test]
fn constant_function() -> TestResult {
    let x = [0.0, 0.2, 1.1, 3.7, 5.0];
    let y = [2.5; 5];
    let cfg = NaturalSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[-0.0, 0.2, 1.0, 2.5, 3.7, 5.0])?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &[2.5; 6], 1e-12);
    Ok(())
}

#[test]
fn linear_function_and_extrapolation() -> TestResult {
    // y = 3x - 1
    let x = [-2.0, 0.0, 0.3, 1.7, 4.2];
    let y: Vec<f64> = x.iter().map(|&xi| 3.0 * xi - 1.0).collect();
    let x_eval = [-3.0, -2.0, -1.0, 0.0, 0.3, 1.0, 1.7, 3.0, 4.2, 5.0];
    let expected: Vec<f64> = x_eval.iter().map(|&t| 3.0 * t - 1.0).collect();

    let cfg = NaturalSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &expected, 1e-12);
    assert!(rep.extrapolated[0] && rep.extrapolated[9]);
    assert_eq!(rep.extrapolated.iter().filter(|&&e| e).count(), 2);
    Ok(())
}

#[test]
fn two_points_is_a_line() -> TestResult {
    let cfg = NaturalSplineCfg::new()
        .set_x(&[2.0, 5.0])?
        .set_y(&[7.0, 1.0])?
        .set_x_eval(&[2.0, 3.0, 4.0, 5.0])?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &[7.0, 5.0, 3.0, 1.0], 1e-12);
    Ok(())
}

#[test]
fn free_ends_have_zero_curvature() -> TestResult {
    let x = [0.0, 0.7, 1.5, 2.1, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|t: &f64| t.sin()).collect();
    let s = CubicSpline::natural(&x, &y)?;

    assert_abs_diff_eq!(s.second_derivative(0.0)?, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.second_derivative(4.0)?, 0.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn twice_continuously_differentiable() -> TestResult {
    let x = [0.0, 0.7, 1.5, 2.1, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|t: &f64| t.sin()).collect();
    let s = CubicSpline::natural(&x, &y)?;

    let eps = 1e-7;
    for &xi in &x[1..x.len() - 1] {
        assert_abs_diff_eq!(s.eval(xi - eps)?, s.eval(xi + eps)?, epsilon = 1e-6);
        assert_abs_diff_eq!(s.derivative(xi - eps)?, s.derivative(xi + eps)?, epsilon = 1e-5);
        assert_abs_diff_eq!(
            s.second_derivative(xi - eps)?,
            s.second_derivative(xi + eps)?,
            epsilon = 1e-5
        );
    }
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> TestResult {
    let cfg = NaturalSplineCfg::new()
        .set_x(&[0.0, 1.0, 2.0])?
        .set_y(&[0.0, 1.0, 4.0])?
        .set_x_eval(&[])?;
    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn nonuniform_spacing() -> TestResult {
    let x = [0.0, 0.1, 0.1000001, 2.0, 10.0];
    let y = [0.0, 0.01, 0.01000001, 4.0, 100.0];
    let cfg = NaturalSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[0.0, 0.05, 0.1, 0.1000001, 1.0, 2.0, 5.0, 10.0])?;
    let rep = interpolate(cfg)?;

    for (i, v) in rep.evaluated.iter().enumerate() {
        assert!(v.is_finite(), "non-finite at {}", i);
    }
    Ok(())
}

/// Natural spline in the classical `a + b dx + c dx^2 + d dx^3` form,
/// solving for `c = S''/2` at the interior nodes.
fn second_derivative_form_eval(x: &[f64], y: &[f64], x_eval: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    let m = n - 2;
    let mut c_full = vec![0.0; n];
    let mut a = vec![0.0; m];
    let mut b = vec![0.0; m];
    let mut c = vec![0.0; m];
    let mut d = vec![0.0; m];

    for k in 0..m {
        let i = k + 1;
        a[k] = h[i - 1];
        b[k] = 2.0 * (h[i - 1] + h[i]);
        c[k] = h[i];
        d[k] = 3.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    c[0] /= b[0];
    d[0] /= b[0];
    for i in 1..m {
        let denom = b[i] - a[i] * c[i - 1];
        if i < m - 1 { c[i] /= denom; }
        d[i] = (d[i] - a[i] * d[i - 1]) / denom;
    }
    for i in (0..m - 1).rev() {
        d[i] -= c[i] * d[i + 1];
    }
    c_full[1..(m + 1)].copy_from_slice(&d);

    let mut out = Vec::with_capacity(x_eval.len());
    for &xq in x_eval {
        let lo = (0..n - 1).rfind(|&i| x[i] <= xq).unwrap_or(0);
        let bcoef = (y[lo + 1] - y[lo]) / h[lo] - h[lo] * (2.0 * c_full[lo] + c_full[lo + 1]) / 3.0;
        let dcoef = (c_full[lo + 1] - c_full[lo]) / (3.0 * h[lo]);
        let dx = xq - x[lo];
        out.push(y[lo] + bcoef * dx + c_full[lo] * dx * dx + dcoef * dx * dx * dx);
    }
    out
}

#[test]
fn agrees_with_second_derivative_form() -> TestResult {
    let x: Vec<f64> = (0..21).map(|k| (k as f64).powf(1.3)).collect();
    let y: Vec<f64> = x.iter().map(|&t| (t + 1.0).ln() + 0.1 * (0.5 * t).sin()).collect();
    let x_max  = x[x.len() - 1];
    let x_eval: Vec<f64> = (0..51).map(|k| k as f64 * x_max / 50.0).collect();

    let cfg = NaturalSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &second_derivative_form_eval(&x, &y, &x_eval), 1e-10);
    Ok(())
}

#[test]
fn large_n_reasonable() -> TestResult {
    let n = 2000;
    let x: Vec<f64> = (0..n).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = x.iter().map(|&t| (t + 1.0).ln()).collect();
    let x_eval: Vec<f64> = (0..1000).map(|i| i as f64 * x[n - 1] / 999.0).collect();

    let cfg = NaturalSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.n_provided, n);
    assert_eq!(rep.n_evaluated, x_eval.len());
    assert!(rep.evaluated.iter().all(|v| v.is_finite()));
    Ok(())
}
