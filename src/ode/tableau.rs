//! Butcher tableaus and the generic explicit Runge–Kutta step.
//!
//! ```text
//! k_i     = f(t + c_i h, y + h Σ_{j<i} a_ij k_j)
//! y_{n+1} = y + h Σ b_i k_i
//! err     = h Σ (b_i - b̂_i) k_i      (embedded pairs only)
//! ```

use crate::ode::errors::OdeError;
use crate::primitives::Vector;


/// `b_low` holds the weights of the embedded lower-order solution, empty
/// for single methods.
pub(crate) struct Tableau {
    pub(crate) c:     &'static [f64],
    pub(crate) a:     &'static [&'static [f64]],
    pub(crate) b:     &'static [f64],
    pub(crate) b_low: &'static [f64],
}

impl Tableau {
    #[inline]
    pub(crate) fn stages(&self) -> usize { self.c.len() }
}


pub(crate) static EULER: Tableau = Tableau {
    c:     &[0.0],
    a:     &[&[]],
    b:     &[1.0],
    b_low: &[],
};

pub(crate) static HEUN: Tableau = Tableau {
    c:     &[0.0, 1.0],
    a:     &[&[], &[1.0]],
    b:     &[0.5, 0.5],
    b_low: &[],
};

pub(crate) static MIDPOINT: Tableau = Tableau {
    c:     &[0.0, 0.5],
    a:     &[&[], &[0.5]],
    b:     &[0.0, 1.0],
    b_low: &[],
};

pub(crate) static RALSTON: Tableau = Tableau {
    c:     &[0.0, 2.0 / 3.0],
    a:     &[&[], &[2.0 / 3.0]],
    b:     &[0.25, 0.75],
    b_low: &[],
};

pub(crate) static RK4: Tableau = Tableau {
    c:     &[0.0, 0.5, 0.5, 1.0],
    a:     &[&[], &[0.5], &[0.0, 0.5], &[0.0, 0.0, 1.0]],
    b:     &[1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
    b_low: &[],
};

pub(crate) static BOGACKI_SHAMPINE: Tableau = Tableau {
    c:     &[0.0, 0.5, 0.75, 1.0],
    a:     &[&[], &[0.5], &[0.0, 0.75], &[2.0 / 9.0, 1.0 / 3.0, 4.0 / 9.0]],
    b:     &[2.0 / 9.0, 1.0 / 3.0, 4.0 / 9.0, 0.0],
    b_low: &[7.0 / 24.0, 0.25, 1.0 / 3.0, 0.125],
};


/// `y + h Σ w_i k_i`
fn combine(y: &Vector, h: f64, w: &[f64], k: &[Vector]) -> Vector {
    let mut out = y.clone();
    for (wi, ki) in w.iter().zip(k) {
        if *wi == 0.0 { continue; }
        for (o, kij) in out.iter_mut().zip(ki.iter()) {
            *o += h * wi * kij;
        }
    }
    out
}


/// One explicit step of `tab` from `(t, y)`; returns `y_{n+1}` and, for
/// embedded pairs, the local error estimate.
pub(crate) fn rk_step<F: Fn(f64, &Vector) -> Vector>(
    tab: &Tableau,
    f: &F,
    t: f64,
    y: &Vector,
    h: f64,
) -> Result<(Vector, Option<Vector>), OdeError> {
    let mut k: Vec<Vector> = Vec::with_capacity(tab.stages());
    for (ci, ai) in tab.c.iter().zip(tab.a) {
        let yi = combine(y, h, ai, &k);
        let ki = f(t + ci * h, &yi);
        if ki.len() != y.len() {
            return Err(OdeError::DimensionMismatch { expected: y.len(), got: ki.len() });
        }
        k.push(ki);
    }

    let y_new = combine(y, h, tab.b, &k);
    let error = (!tab.b_low.is_empty()).then(|| {
        let diff = tab.b.iter().zip(tab.b_low).map(|(b, bl)| b - bl).collect::<Vec<_>>();
        combine(&Vector::zeros(y.len()), h, &diff, &k)
    });
    Ok((y_new, error))
}
