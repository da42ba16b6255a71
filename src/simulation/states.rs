//! Core state types for the N-body simulation.
//!
//! Defines the body and system structs:
//! - `Body`   a point mass with position, velocity and mass, using `NVec3`
//! - `System` the ordered collection of live bodies plus elapsed time
//!
//! The collection order is not physical, but it decides collision
//! tie-breaking: a lower index always absorbs a higher one.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Stable identifier assigned from the creation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64,   // mass
}

impl Body {
    pub fn new(id: BodyId, x: NVec3, v: NVec3, m: f64) -> Self {
        Self { id, x, v, m }
    }

    /// Body with zero initial velocity
    pub fn at_rest(id: BodyId, x: NVec3, m: f64) -> Self {
        Self::new(id, x, NVec3::zeros(), m)
    }

    /// A body with non-positive mass is treated as removed
    pub fn is_live(&self) -> bool {
        self.m > 0.0
    }

    pub fn momentum(&self) -> NVec3 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        super::vector::distance(self, other)
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // live bodies, in collision priority order
    pub t: f64,            // elapsed simulated time
    pub tick: usize,       // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            tick: 0,
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(NVec3::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
