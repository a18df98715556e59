//! Quadrature rule definitions.

use crate::quadrature::gauss_legendre::MAX_GAUSS_POINTS;


/// Composite rules.
/// - [`Rule::Midpoint`]         one point per subinterval, exact to degree 1
/// - [`Rule::Trapezoid`]        end points, exact to degree 1
/// - [`Rule::Simpson`]          parabola over pairs of subintervals, exact to degree 3
/// - [`Rule::GaussLegendre`]    `k` points per subinterval, exact to degree `2k - 1`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Midpoint,
    Trapezoid,
    Simpson,
    GaussLegendre(usize),
}

impl Rule {
    /// Order `p` of the composite error `O(h^p)`.
    pub const fn order(self) -> i32 {
        match self {
            Rule::Midpoint | Rule::Trapezoid => 2,
            Rule::Simpson                    => 4,
            Rule::GaussLegendre(k)           => 2 * k as i32,
        }
    }

    /// Highest polynomial degree integrated exactly.
    pub const fn degree_of_exactness(self) -> usize {
        match self {
            Rule::Midpoint | Rule::Trapezoid => 1,
            Rule::Simpson                    => 3,
            Rule::GaussLegendre(k)           => (2 * k).saturating_sub(1),
        }
    }

    pub fn rule_name(self) -> &'static str {
        match self {
            Rule::Midpoint         => "composite midpoint",
            Rule::Trapezoid        => "composite trapezoid",
            Rule::Simpson          => "composite simpson",
            Rule::GaussLegendre(_) => "composite gauss-legendre",
        }
    }

    /// `true` when `k` is within `1..=MAX_GAUSS_POINTS` for Gauss–Legendre.
    pub const fn is_valid(self) -> bool {
        match self {
            Rule::GaussLegendre(k) => k >= 1 && k <= MAX_GAUSS_POINTS,
            _ => true,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::GaussLegendre(k) => write!(f, "{} ({k} points)", self.rule_name()),
            _ => write!(f, "{}", self.rule_name()),
        }
    }
}
