//! Elementary vector math shared by the force, collision and boundary passes

use super::states::{Body, NVec3};

/// Euclidean distance between the positions of two bodies.
///
/// Coincident bodies give exactly `0.0`; callers that divide by the
/// distance must special-case it.
pub fn distance(a: &Body, b: &Body) -> f64 {
    (a.x - b.x).norm()
}

/// Displacement pointing from `from` to `to`
pub fn displacement(from: &Body, to: &Body) -> NVec3 {
    to.x - from.x
}
