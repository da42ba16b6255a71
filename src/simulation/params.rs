//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the run-wide settings:
//! - enclosure edge length and time step size,
//! - the gravitational constant (`g`)
//!
//! The remaining physical constants are fixed for every run.

use crate::configuration::config::RunConfig;

/// Universal gravitational constant
pub const GRAVITY_CONST: f64 = 6.674e-11;

/// Bodies closer than this merge
pub const COLLISION_DISTANCE: f64 = 1.0;

/// Mean of the initial mass distribution
pub const MASS_MEAN: f64 = 1e21;

/// Standard deviation of the initial mass distribution
pub const MASS_STD_DEV: f64 = 1e15;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub size_enclosure: f64, // edge length of the cubic enclosure
    pub time_step: f64,      // dt per tick
    pub g: f64,              // gravitational constant
}

impl Parameters {
    pub fn new(size_enclosure: f64, time_step: f64) -> Self {
        Self {
            size_enclosure,
            time_step,
            g: GRAVITY_CONST,
        }
    }
}

impl From<&RunConfig> for Parameters {
    fn from(cfg: &RunConfig) -> Self {
        Self::new(cfg.size_enclosure, cfg.time_step)
    }
}
