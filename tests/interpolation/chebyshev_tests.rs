use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::{chebyshev_nodes, Interpolator, LagrangePolynomial};

type TestResult = Result<(), InterpolationError>;

fn runge(x: f64) -> f64 { 1.0 / (1.0 + 25.0 * x * x) }

fn max_error(x: &[f64]) -> Result<f64, InterpolationError> {
    let y: Vec<f64> = x.iter().map(|&t| runge(t)).collect();
    let p = LagrangePolynomial::new(x, &y)?;
    let mut worst: f64 = 0.0;
    for k in 0..=200 {
        let xq = -1.0 + 2.0 * k as f64 / 200.0;
        worst = worst.max((p.eval(xq)? - runge(xq)).abs());
    }
    Ok(worst)
}

#[test]
fn three_nodes_on_zero_two() -> TestResult {
    let x = chebyshev_nodes(3, 0.0, 2.0)?;
    let c = (std::f64::consts::PI / 6.0).cos();

    assert_abs_diff_eq!(x[0], 1.0 - c, epsilon = 1e-15);
    assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(x[2], 1.0 + c, epsilon = 1e-15);
    Ok(())
}

#[test]
fn nodes_stay_inside_the_interval() -> TestResult {
    let x = chebyshev_nodes(25, -3.0, 7.0)?;
    assert_eq!(x.len(), 25);
    assert!(x.iter().all(|&t| t > -3.0 && t < 7.0));
    assert!(x.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn tames_runge() -> TestResult {
    let equispaced: Vec<f64> = (0..11).map(|k| -1.0 + 0.2 * k as f64).collect();
    let chebyshev = chebyshev_nodes(11, -1.0, 1.0)?;

    let e_equi = max_error(&equispaced)?;
    let e_cheb = max_error(&chebyshev)?;
    assert!(e_equi > 1.0, "equispaced error {e_equi}");
    assert!(e_cheb < 0.2, "chebyshev error {e_cheb}");
    Ok(())
}

#[test]
fn invalid_arguments() {
    assert_eq!(chebyshev_nodes(0, 0.0, 1.0).unwrap_err(), InterpolationError::InvalidNodeCount { got: 0 });
    assert_eq!(chebyshev_nodes(4, 1.0, 1.0).unwrap_err(), InterpolationError::InvalidInterval { a: 1.0, b: 1.0 });
    assert!(matches!(chebyshev_nodes(4, f64::NAN, 1.0), Err(InterpolationError::InvalidInterval { .. })));
}
