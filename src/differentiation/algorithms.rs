//! Finite-difference schemes.
//!
//! | scheme       | first derivative                                  | order |
//! |--------------|---------------------------------------------------|-------|
//! | `Forward`    | `(f(x+h) - f(x)) / h`                             | 1     |
//! | `Backward`   | `(f(x) - f(x-h)) / h`                             | 1     |
//! | `Central`    | `(f(x+h) - f(x-h)) / 2h`                          | 2     |
//! | `Richardson` | `(8 (f(x+h) - f(x-h)) - (f(x+2h) - f(x-2h))) / 12h` | 4   |
//!
//! Second derivatives use the matching three- (or five-) point stencils with
//! the same orders.


/// Finite-difference scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Scheme {
    Forward,
    Backward,
    #[default]
    Central,
    /// central difference extrapolated over `h` and `2h`
    Richardson,
}

impl Scheme {
    /// Order `p` of the truncation error `O(h^p)`.
    pub const fn order(self) -> i32 {
        match self {
            Scheme::Forward | Scheme::Backward => 1,
            Scheme::Central                    => 2,
            Scheme::Richardson                 => 4,
        }
    }

    pub fn scheme_name(self) -> &'static str {
        match self {
            Scheme::Forward    => "forward difference",
            Scheme::Backward   => "backward difference",
            Scheme::Central    => "central difference",
            Scheme::Richardson => "richardson extrapolation",
        }
    }

    /// Step balancing truncation `O(h^p)` against round-off `O(ε / h^d)`
    /// for derivative order `d`:
    ///
    /// ```text
    /// h = ε^(1 / (d + p)) * max(|x|, 1)
    /// ```
    pub fn optimal_step(self, derivative: i32, x: f64) -> f64 {
        let exponent = 1.0 / f64::from(derivative + self.order());
        f64::EPSILON.powf(exponent) * x.abs().max(1.0)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scheme_name())
    }
}
