//! Force contributors for the n-body engine
//!
//! Defines the force-law trait, a set that sums several laws, and
//! direct Newtonian gravity (O(N²), no softening)

use crate::simulation::states::{NVec3, System};
use crate::simulation::vector::{displacement, distance};

/// Collection of force terms (gravity, drag, etc)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceLaw + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute the total force on every body of `sys`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    /// - reads `sys` only, so every entry sees the same start-of-tick state
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec3]) {
        for (target, slot) in out.iter_mut().enumerate() {
            *slot = NVec3::zeros();
            for term in &self.terms {
                *slot += term.force_on(target, sys);
            }
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A source of force acting on one body of a [`System`]
pub trait ForceLaw {
    /// Force on `sys.bodies[target]` exerted by the rest of the system
    fn force_on(&self, target: usize, sys: &System) -> NVec3;
}

/// Newtonian gravity by direct summation
///
/// Contributions are added in ascending index of the attracting body so that
/// floating-point results are reproducible run to run.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl ForceLaw for NewtonianGravity {
    fn force_on(&self, target: usize, sys: &System) -> NVec3 {
        let bt = &sys.bodies[target];
        let mut force = NVec3::zeros();

        for (i, bi) in sys.bodies.iter().enumerate() {
            if i == target {
                continue;
            }

            // d points from the target toward body i, so the pull is along +d
            let d = displacement(bt, bi);
            let r = distance(bi, bt);

            // coincident pair: no direction, no contribution
            if r == 0.0 {
                continue;
            }

            // |F| / r = G m_i m_t / r^3
            let coef = self.g * bi.m * bt.m / (r * r * r);
            force += coef * d;
        }

        force
    }
}
