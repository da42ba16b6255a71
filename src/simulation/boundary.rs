//! Reflective walls of the cubic enclosure `[0, S]^3`

use super::states::{Body, System};

/// Clamp `body` into the enclosure, reflecting velocity on each touched axis.
///
/// Axes are handled independently, so an edge or corner contact flips
/// several components in one call. Reflection is perfectly elastic.
pub fn reflect(body: &mut Body, size_enclosure: f64) {
    for axis in 0..3 {
        if body.x[axis] <= 0.0 {
            body.x[axis] = 0.0;
            body.v[axis] = -body.v[axis];
        } else if body.x[axis] >= size_enclosure {
            body.x[axis] = size_enclosure;
            body.v[axis] = -body.v[axis];
        }
    }
}

/// Apply [`reflect`] to every body
pub fn reflect_all(sys: &mut System, size_enclosure: f64) {
    for b in sys.bodies.iter_mut() {
        reflect(b, size_enclosure);
    }
}
