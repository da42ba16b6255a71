//! Pseudo-random initial conditions
//!
//! Bodies are drawn from a seeded `ChaChaRng` so the same seed always yields
//! the same starting collection.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

use super::params::{MASS_MEAN, MASS_STD_DEV};
use super::states::{Body, BodyId, NVec3};

/// Box-Muller draw from N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // shift to (0, 1] so ln never sees zero
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample a position uniformly inside `[0, size_enclosure)^3`
pub fn sample_position(rng: &mut ChaChaRng, size_enclosure: f64) -> NVec3 {
    let x = rng.random_range(0.0..size_enclosure);
    let y = rng.random_range(0.0..size_enclosure);
    let z = rng.random_range(0.0..size_enclosure);
    NVec3::new(x, y, z)
}

/// Build `count` bodies at rest.
///
/// For each body, in creation order: x, y, z, then mass. The creation index
/// becomes the body id.
pub fn sample_bodies(rng: &mut ChaChaRng, count: usize, size_enclosure: f64) -> Vec<Body> {
    (0..count)
        .map(|i| {
            let x = sample_position(rng, size_enclosure);
            let m = sample_gaussian(rng, MASS_MEAN, MASS_STD_DEV);
            Body::at_rest(BodyId(i), x, m)
        })
        .collect()
}
