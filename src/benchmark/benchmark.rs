use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, BodyId, NVec3};

/// Lattice spacing; larger than the collision distance so nothing merges
const SPACING: f64 = 2.0;

/// Helper to build `n` bodies on a cubic lattice, no rand needed
fn lattice_bodies(n: usize) -> (Vec<Body>, f64) {
    let side = (n as f64).cbrt().ceil().max(1.0) as usize;

    let bodies = (0..n)
        .map(|i| {
            let x = NVec3::new(
                (i % side) as f64 * SPACING + 1.0,
                ((i / side) % side) as f64 * SPACING + 1.0,
                (i / (side * side)) as f64 * SPACING + 1.0,
            );
            Body::at_rest(BodyId(i), x, 1.0)
        })
        .collect();

    // enclosure leaves one spacing of room past the last lattice row
    let size = side as f64 * SPACING + SPACING;
    (bodies, size)
}

/// Scenario of size `n` with a tiny time step so bodies barely move
fn make_scenario(n: usize) -> Scenario {
    let (bodies, size) = lattice_bodies(n);
    Scenario::new(Parameters::new(size, 1.0e-3), bodies)
}

/// Mean wall time of `steps` ticks, in milliseconds
fn time_ticks(scenario: &mut Scenario, steps: usize) -> f64 {
    let t0 = Instant::now();
    for _ in 0..steps {
        scenario.step();
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

pub fn bench_tick() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 3;

    for n in ns {
        let mut scenario = make_scenario(n);

        // Warm up
        scenario.step();

        let ms = time_ticks(&mut scenario, steps);
        println!("N = {n:5}, tick = {ms:10.3} ms, bodies after = {}", scenario.system.body_count());
    }
}

/// Benchmark `Scenario::step` over a range of n
/// Output is CSV, ready to paste into a spreadsheet
pub fn bench_tick_curve() {
    println!("N,tick_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to keep runtime down
        let steps = if n <= 800 { 5 } else { 1 };

        let mut scenario = make_scenario(n);
        let ms = time_ticks(&mut scenario, steps);

        println!("{},{:.6}", n, ms);
    }
}
