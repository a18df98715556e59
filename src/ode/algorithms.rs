//! Integration methods.
//!
//! [`Method`] (fixed step)
//! ┌ `Euler`    : order 1
//! ├ `Heun`     : improved Euler, order 2
//! ├ `Midpoint` : order 2
//! ├ `Ralston`  : order 2, minimal error bound
//! └ `Rk4`      : classical Runge–Kutta, order 4
//!
//! [`AdaptiveMethod`]
//! ┌ `BogackiShampine` : embedded 3(2) pair, propagates the order-3 solution
//! └ `Rk4StepDoubling` : one `h` step against two `h/2` steps of RK4

use std::fmt;

use crate::ode::tableau::{Tableau, BOGACKI_SHAMPINE, EULER, HEUN, MIDPOINT, RALSTON, RK4};


#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Method {
    Euler,
    Heun,
    Midpoint,
    Ralston,
    #[default]
    Rk4,
}

impl Method {
    pub fn order(self) -> u32 {
        match self {
            Method::Euler    => 1,
            Method::Heun     => 2,
            Method::Midpoint => 2,
            Method::Ralston  => 2,
            Method::Rk4      => 4,
        }
    }

    pub fn method_name(self) -> &'static str {
        match self {
            Method::Euler    => "euler",
            Method::Heun     => "heun",
            Method::Midpoint => "midpoint",
            Method::Ralston  => "ralston",
            Method::Rk4      => "rk4",
        }
    }

    pub(crate) fn tableau(self) -> &'static Tableau {
        match self {
            Method::Euler    => &EULER,
            Method::Heun     => &HEUN,
            Method::Midpoint => &MIDPOINT,
            Method::Ralston  => &RALSTON,
            Method::Rk4      => &RK4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}


#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AdaptiveMethod {
    #[default]
    BogackiShampine,
    Rk4StepDoubling,
}

impl AdaptiveMethod {
    /// Order `q` of the local error estimate; the step controller uses
    /// the exponent `1 / (q + 1)`.
    pub fn error_order(self) -> u32 {
        match self {
            AdaptiveMethod::BogackiShampine => 2,
            AdaptiveMethod::Rk4StepDoubling => 4,
        }
    }

    pub fn method_name(self) -> &'static str {
        match self {
            AdaptiveMethod::BogackiShampine => "bogacki-shampine 3(2)",
            AdaptiveMethod::Rk4StepDoubling => "rk4 step doubling",
        }
    }

    pub(crate) fn tableau(self) -> &'static Tableau {
        match self {
            AdaptiveMethod::BogackiShampine => &BOGACKI_SHAMPINE,
            AdaptiveMethod::Rk4StepDoubling => &RK4,
        }
    }
}

impl fmt::Display for AdaptiveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
