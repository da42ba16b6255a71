//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `RunConfig` and produces the runtime bundle (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! Construction resolves any overlaps already present in the initial bodies,
//! so the first tick starts from a collision-free collection.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::RunConfig;
use crate::simulation::boundary::reflect_all;
use crate::simulation::collisions::{resolve_system, MergeEvent};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::sampling::sample_bodies;
use crate::simulation::states::{Body, System};

/// Summary of one completed tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: usize,              // 1-based index of the tick just completed
    pub merges: Vec<MergeEvent>,  // merges from this tick's collision pass
    pub body_count: usize,        // live bodies after the collision pass
}

pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub initial_merges: Vec<MergeEvent>, // merges from the pre-tick pass
}

impl Scenario {
    /// Sample the initial bodies from the configured seed and build the scenario
    pub fn build_scenario(cfg: &RunConfig) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(cfg.random_seed);
        let bodies = sample_bodies(&mut rng, cfg.num_objects, cfg.size_enclosure);
        Self::new(Parameters::from(cfg), bodies)
    }

    /// Build a scenario from explicit bodies, merging any that start overlapped
    pub fn new(parameters: Parameters, bodies: Vec<Body>) -> Self {
        let mut system = System::new(bodies);
        let initial_merges = resolve_system(&mut system);

        let forces = ForceSet::new().with(NewtonianGravity { g: parameters.g });

        Self {
            parameters,
            system,
            forces,
            initial_merges,
        }
    }

    /// Run one tick: forces -> integration -> walls -> collisions.
    /// Each pass finishes over the whole collection before the next starts.
    pub fn step(&mut self) -> TickReport {
        let Scenario {
            system,
            parameters,
            forces,
            ..
        } = self;

        semi_implicit_euler(system, forces, parameters);
        reflect_all(system, parameters.size_enclosure);
        let merges = resolve_system(system);

        system.tick += 1;

        TickReport {
            tick: system.tick,
            merges,
            body_count: system.body_count(),
        }
    }
}
