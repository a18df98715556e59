use crate::primitives::Vector;


/// One point `(t, y(t))` of a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub y: Vector,
}
