//! Singular values by one-sided Jacobi rotations.
//!
//! Pairs of columns `(p, q)` are rotated until all are mutually orthogonal;
//! the singular values are then the column norms.

use crate::primitives::Matrix;


const MAX_SWEEPS: usize = 60;


/// Singular values of `a`, descending.
pub(crate) fn singular_values(a: &Matrix) -> Vec<f64> {
    let (m, n) = a.shape();
    let mut u = a.clone();

    for sweep in 0..MAX_SWEEPS {
        let mut rotated = false;
        for p in 0..n {
            for q in p + 1..n {
                let (mut alpha, mut beta, mut gamma) = (0.0, 0.0, 0.0);
                for i in 0..m {
                    alpha += u[(i, p)] * u[(i, p)];
                    beta  += u[(i, q)] * u[(i, q)];
                    gamma += u[(i, p)] * u[(i, q)];
                }
                if gamma == 0.0 || gamma.abs() <= f64::EPSILON * (alpha * beta).sqrt() {
                    continue;
                }
                rotated = true;

                let zeta = (beta - alpha) / (2.0 * gamma);
                let t = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = c * t;
                for i in 0..m {
                    let (up, uq) = (u[(i, p)], u[(i, q)]);
                    u[(i, p)] = c * up - s * uq;
                    u[(i, q)] = s * up + c * uq;
                }
            }
        }
        if !rotated {
            tracing::trace!(sweeps = sweep, "jacobi converged");
            break;
        }
    }

    let mut sigma = (0..n)
        .map(|j| (0..m).map(|i| u[(i, j)] * u[(i, j)]).sum::<f64>().sqrt())
        .collect::<Vec<_>>();
    sigma.sort_by(|x, y| y.total_cmp(x));
    sigma
}
