use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::spline::monotonic::{interpolate, MonotonicSplineCfg};

type TestResult = Result<(), InterpolationError>;

fn assert_all_close(a: &[f64], b: &[f64], eps: f64) {
    assert_eq!(a.len(), b.len());
    for (ai, bi) in a.iter().zip(b) {
        assert_abs_diff_eq!(*ai, *bi, epsilon = eps);
    }
}

fn piece(x: &[f64], xq: f64) -> usize {
    (0..x.len() - 1).rfind(|&i| x[i] <= xq).unwrap_or(0).min(x.len() - 2)
}

#[test]
fn report_metadata() -> TestResult {
    let cfg = MonotonicSplineCfg::new()
        .set_x(&[0.0, 1.0, 2.0])?
        .set_y(&[0.0, 1.0, 4.0])?
        .set_x_eval(&[0.5, 1.5])?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "monotonic cubic spline");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    Ok(())
}

#[test]
fn exact_hits() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];
    let cfg = MonotonicSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &y, 1e-12);
    Ok(())
}

#[test]
fn linear_function() -> TestResult {
    let x = [-2.0, 0.0, 0.3, 1.7, 4.2];
    let y: Vec<f64> = x.iter().map(|&xi| 3.0 * xi - 1.0).collect();
    let x_eval = [-2.0, -1.0, 0.0, 0.3, 1.0, 1.7, 3.0, 4.2];
    let expected: Vec<f64> = x_eval.iter().map(|&t| 3.0 * t - 1.0).collect();

    let cfg = MonotonicSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &expected, 1e-12);
    Ok(())
}

#[test]
fn two_points_is_a_line() -> TestResult {
    let cfg = MonotonicSplineCfg::new()
        .set_x(&[2.0, 5.0])?
        .set_y(&[7.0, 1.0])?
        .set_x_eval(&[2.0, 3.0, 4.0, 5.0, 6.0])?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &[7.0, 5.0, 3.0, 1.0, -1.0], 1e-12);
    assert_eq!(rep.extrapolated, vec![false, false, false, false, true]);
    Ok(())
}

#[test]
fn monotone_no_overshoot() -> TestResult {
    let x = [0.0, 1.0, 2.0, 4.0];
    let y = [0.0, 1.0, 1.5, 3.0];
    let x_grid: Vec<f64> = (0..=80).map(|k| 4.0 * k as f64 / 80.0).collect();

    let cfg = MonotonicSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_grid)?;
    let rep = interpolate(cfg)?;

    for w in rep.evaluated.windows(2) {
        assert!(w[1] >= w[0] - 1e-12, "not monotone: {} -> {}", w[0], w[1]);
    }
    for (&xq, &yq) in x_grid.iter().zip(&rep.evaluated) {
        let i  = piece(&x, xq);
        let lo = y[i].min(y[i + 1]);
        let hi = y[i].max(y[i + 1]);
        assert!(yq >= lo - 1e-12 && yq <= hi + 1e-12, "overshoot at x={}", xq);
    }
    Ok(())
}

#[test]
fn step_data_stays_in_range() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let x_grid: Vec<f64> = (0..=100).map(|k| 5.0 * k as f64 / 100.0).collect();

    let cfg = MonotonicSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_grid)?;
    let rep = interpolate(cfg)?;

    assert!(rep.evaluated.iter().all(|&v| (-1e-12..=1.0 + 1e-12).contains(&v)));
    Ok(())
}

#[test]
fn flat_segment_preserved() -> TestResult {
    let cfg = MonotonicSplineCfg::new()
        .set_x(&[0.0, 1.0, 2.0, 3.0])?
        .set_y(&[0.0, 1.0, 1.0, 2.0])?
        .set_x_eval(&[1.25, 1.5, 1.75])?;
    let rep = interpolate(cfg)?;

    assert_all_close(&rep.evaluated, &[1.0; 3], 1e-12);
    Ok(())
}

#[test]
fn large_n_reasonable() -> TestResult {
    let n = 2000;
    let x: Vec<f64> = (0..n).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = x.iter().map(|&t| (t + 1.0).ln()).collect();
    let x_eval: Vec<f64> = (0..1000).map(|i| i as f64 * x[n - 1] / 999.0).collect();

    let cfg = MonotonicSplineCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.n_provided, n);
    assert!(rep.evaluated.iter().all(|v| v.is_finite()));
    Ok(())
}
