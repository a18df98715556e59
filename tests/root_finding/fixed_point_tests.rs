use approx::assert_abs_diff_eq;
use numeth::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use numeth::primitives::ToleranceError as BaseToleranceError;
use numeth::root_finding::errors::ToleranceError;
use numeth::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), FixedPointError>;

#[test]
fn cosine_fixed_point() -> TestResult {
    let res = fixed_point(f64::cos, 1.0, FixedPointCfg::new())?;

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 0.739_085_133_215_160_6, epsilon = 1e-10);
    assert_eq!(res.evaluations, res.iterations);
    assert_eq!(res.algorithm_name, "fixed_point");
    Ok(())
}

#[test]
fn babylonian_map_converges_fast() -> TestResult {
    let cfg = FixedPointCfg::new().set_abs_fx(1e-300)?;
    let res = fixed_point(|x| 0.5 * (x + 2.0 / x), 1.0, cfg)?;

    // the last step is either below 4 ulp or exactly zero
    assert!(matches!(
        res.tolerance_satisfied,
        ToleranceSatisfied::StepSizeReached | ToleranceSatisfied::AbsFxReached
    ));
    assert!(res.iterations <= 7);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-15);
    Ok(())
}

#[test]
fn blow_up_is_divergence() {
    let err = fixed_point(|x| x * x, 10.0, FixedPointCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::Diverged { .. }));
}

#[test]
fn oscillation_hits_iteration_limit() -> TestResult {
    let cfg = FixedPointCfg::new().set_max_iter(10)?;
    let res = fixed_point(|x| -x, 1.0, cfg)?;

    assert!(!res.converged());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_eq!(res.estimated_error, 2.0);
    Ok(())
}

#[test]
fn iteration_limit_keeps_the_signed_residual() -> TestResult {
    // odd budget: the last step maps 1 to -1
    let cfg = FixedPointCfg::new().set_max_iter(5)?;
    let res = fixed_point(|x| -x, 1.0, cfg)?;

    assert!(!res.converged());
    assert_eq!(res.f_root, -2.0);
    assert_eq!(res.estimated_error, 2.0);
    Ok(())
}

#[test]
fn zero_budget_is_a_tolerance_error() {
    assert!(matches!(
        FixedPointCfg::new().set_max_iter(0),
        Err(ToleranceError::Base(BaseToleranceError::InvalidMaxIter { got: 0 }))
    ));
}
