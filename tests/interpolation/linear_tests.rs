use approx::assert_abs_diff_eq;
use numeth::interpolation::errors::InterpolationError;
use numeth::interpolation::linear::{interpolate, LinearCfg, PiecewiseLinear};
use numeth::interpolation::Interpolator;

type TestResult = Result<(), InterpolationError>;

#[test]
fn midpoints_and_nodes() -> TestResult {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 2.0, 3.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[0.0, 0.5, 1.0, 2.0, 3.0])?;
    let rep = interpolate(cfg)?;

    let expected = [0.0, 1.0, 2.0, 2.5, 3.0];
    for (v, e) in rep.evaluated.iter().zip(expected) {
        assert_abs_diff_eq!(*v, e, epsilon = 1e-15);
    }
    assert_eq!(rep.algorithm_name, "linear");
    assert!(!rep.any_extrapolated());
    Ok(())
}

#[test]
fn end_segments_extrapolate() -> TestResult {
    let cfg = LinearCfg::new()
        .set_x(&[0.0, 1.0, 3.0])?
        .set_y(&[0.0, 2.0, 3.0])?
        .set_x_eval(&[-1.0, 5.0])?;
    let rep = interpolate(cfg)?;

    assert_abs_diff_eq!(rep.evaluated[0], -2.0, epsilon = 1e-15);
    assert_abs_diff_eq!(rep.evaluated[1], 4.0, epsilon = 1e-15);
    assert_eq!(rep.extrapolated, vec![true, true]);
    Ok(())
}

#[test]
fn derivative_is_segment_slope() -> TestResult {
    let p = PiecewiseLinear::new(&[0.0, 1.0, 3.0], &[0.0, 2.0, 3.0])?;

    assert_abs_diff_eq!(p.derivative(0.5)?, 2.0, epsilon = 1e-15);
    // a node belongs to the segment on its right, the last node to the last segment
    assert_abs_diff_eq!(p.derivative(1.0)?, 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(p.derivative(3.0)?, 0.5, epsilon = 1e-15);
    Ok(())
}

#[test]
fn eval_many_matches_eval() -> TestResult {
    let p  = PiecewiseLinear::new(&[0.0, 2.0], &[1.0, 5.0])?;
    let vs = p.eval_many(&[0.0, 1.0, 2.0])?;
    assert_eq!(vs, vec![1.0, 3.0, 5.0]);
    Ok(())
}

#[test]
fn x_tol_controls_duplicates() -> TestResult {
    let x = [0.0, 1e-6, 1.0];
    assert!(LinearCfg::new().set_x(&x).is_ok());

    let err = LinearCfg::new().set_x_tol(1e-3)?.set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));

    let err = LinearCfg::new().set_x_tol(0.0).unwrap_err();
    assert_eq!(err, InterpolationError::InvalidXTol { got: 0.0 });
    Ok(())
}
