use approx::assert_abs_diff_eq;
use numeth::linear_system::LinearSystemError;
use numeth::optimization::{newton, NewtonCfg, NewtonFallback, NoHessian, OptimizationError, TerminationReason};
use numeth::{Matrix, Vector};

type TestResult = Result<(), OptimizationError>;

fn rosenbrock(x: &Vector) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

fn rosenbrock_grad(x: &Vector) -> Vector {
    Vector::from([
        -2.0 * (1.0 - x[0]) - 400.0 * x[0] * (x[1] - x[0] * x[0]),
        200.0 * (x[1] - x[0] * x[0]),
    ])
}

fn rosenbrock_hess(x: &Vector) -> Matrix {
    Matrix::from_row_major(2, 2, vec![
        1200.0 * x[0] * x[0] - 400.0 * x[1] + 2.0, -400.0 * x[0],
        -400.0 * x[0],                             200.0,
    ]).unwrap()
}

fn bowl(x: &Vector) -> f64 {
    (x[0] - 1.0).powi(2) + 10.0 * (x[1] + 2.0).powi(2)
}

fn bowl_grad(x: &Vector) -> Vector {
    Vector::from([2.0 * (x[0] - 1.0), 20.0 * (x[1] + 2.0)])
}

fn bowl_hess(_: &Vector) -> Matrix {
    Matrix::from_row_major(2, 2, vec![2.0, 0.0, 0.0, 20.0]).unwrap()
}

// f = x² - y² + y⁴, saddle at the origin, minima at (0, ±1/√2)
fn double_well(x: &Vector) -> f64 {
    x[0] * x[0] - x[1] * x[1] + x[1].powi(4)
}

fn double_well_grad(x: &Vector) -> Vector {
    Vector::from([2.0 * x[0], -2.0 * x[1] + 4.0 * x[1].powi(3)])
}

fn double_well_hess(x: &Vector) -> Matrix {
    Matrix::from_row_major(2, 2, vec![2.0, 0.0, 0.0, -2.0 + 12.0 * x[1] * x[1]]).unwrap()
}

#[test]
fn one_step_on_a_quadratic() -> TestResult {
    let report = newton(bowl, bowl_grad, Some(bowl_hess), &Vector::zeros(2), NewtonCfg::new())?;

    assert_eq!(report.iterations, 1);
    assert_eq!(report.termination_reason, TerminationReason::GradientTolReached);
    assert_eq!(report.x.as_slice(), &[1.0, -2.0]);
    assert_eq!(report.algorithm_name, "newton");
    Ok(())
}

#[test]
fn estimated_error_is_the_last_step() -> TestResult {
    let start = Vector::from([0.0, 0.0]);
    let report = newton(bowl, bowl_grad, Some(bowl_hess), &start, NewtonCfg::new())?;

    // the single step goes from the origin to (1, -2)
    assert_abs_diff_eq!(report.estimated_error, 5.0_f64.sqrt(), epsilon = 1e-15);
    let distance = ((report.x[0] - 1.0).powi(2) + (report.x[1] + 2.0).powi(2)).sqrt();
    assert!(distance <= report.estimated_error);

    let at_min = newton(bowl, bowl_grad, Some(bowl_hess), &Vector::from([1.0, -2.0]), NewtonCfg::new())?;
    assert_eq!(at_min.iterations, 0);
    assert_eq!(at_min.estimated_error, 0.0);
    Ok(())
}

#[test]
fn rosenbrock_with_exact_hessian() -> TestResult {
    let start = Vector::from([-1.2, 1.0]);
    let report = newton(rosenbrock, rosenbrock_grad, Some(rosenbrock_hess), &start, NewtonCfg::new())?;

    assert!(report.converged());
    assert!(report.iterations < 100);
    assert_abs_diff_eq!(report.x[0], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(report.x[1], 1.0, epsilon = 1e-6);
    assert!(report.f_x < 1e-12);
    Ok(())
}

#[test]
fn rosenbrock_with_finite_difference_hessian() -> TestResult {
    let start = Vector::from([-1.2, 1.0]);
    let exact = newton(rosenbrock, rosenbrock_grad, Some(rosenbrock_hess), &start, NewtonCfg::new())?;
    let fd    = newton(rosenbrock, rosenbrock_grad, None::<NoHessian>, &start, NewtonCfg::new())?;

    assert!(fd.converged());
    assert_abs_diff_eq!(fd.x[0], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(fd.x[1], 1.0, epsilon = 1e-6);
    // every iteration pays for the Hessian probes
    assert!(fd.evaluations > exact.evaluations);
    Ok(())
}

#[test]
fn uphill_newton_step_fails_when_asked() {
    // at (0, 0.1) the Hessian is indefinite and the Newton step climbs
    let start = Vector::from([0.0, 0.1]);
    let cfg = NewtonCfg::new().set_fallback(NewtonFallback::Fail);
    let err = newton(double_well, double_well_grad, Some(double_well_hess), &start, cfg).unwrap_err();

    match err {
        OptimizationError::NonDescentDirection { slope } => assert!(slope > 0.0),
        other => panic!("expected NonDescentDirection, got {other:?}"),
    }
}

#[test]
fn uphill_newton_step_is_damped_by_default() -> TestResult {
    let start = Vector::from([0.0, 0.1]);
    let report = newton(double_well, double_well_grad, Some(double_well_hess), &start, NewtonCfg::new())?;

    assert!(report.converged());
    assert_abs_diff_eq!(report.x[0], 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(report.x[1], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-8);
    assert!(report.f_x < double_well(&start));
    Ok(())
}

#[test]
fn singular_hessian() -> TestResult {
    let sphere = |x: &Vector| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2);
    let sphere_grad = |x: &Vector| Vector::from([2.0 * (x[0] - 1.0), 2.0 * (x[1] + 2.0)]);
    let zero = |_: &Vector| Matrix::zeros(2, 2);
    let start = Vector::from([3.0, 3.0]);

    let cfg = NewtonCfg::new().set_fallback(NewtonFallback::Fail);
    let err = newton(sphere, sphere_grad, Some(zero), &start, cfg).unwrap_err();
    assert!(matches!(err, OptimizationError::LinearSystem(LinearSystemError::Singular { .. })));

    // steepest descent with α = 1/2 lands exactly on the minimum
    let report = newton(sphere, sphere_grad, Some(zero), &start, NewtonCfg::new())?;
    assert_eq!(report.iterations, 1);
    assert_eq!(report.x.as_slice(), &[1.0, -2.0]);
    Ok(())
}

#[test]
fn wrong_hessian_shape() {
    let big = |_: &Vector| Matrix::identity(3);
    let err = newton(bowl, bowl_grad, Some(big), &Vector::zeros(2), NewtonCfg::new()).unwrap_err();
    assert_eq!(err, OptimizationError::HessianShape { expected: 2, rows: 3, cols: 3 });
}

#[test]
fn iteration_limit_keeps_the_last_iterate() -> TestResult {
    let start = Vector::from([-1.2, 1.0]);
    let cfg = NewtonCfg::new().set_max_iter(2)?;
    let report = newton(rosenbrock, rosenbrock_grad, Some(rosenbrock_hess), &start, cfg)?;

    assert!(!report.converged());
    assert_eq!(report.iterations, 2);
    assert!(report.f_x < rosenbrock(&start));
    Ok(())
}
