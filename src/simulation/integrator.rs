//! Fixed-step time integration for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by a `ForceSet` and `Parameters`.
//! Forces for every body are evaluated from the start-of-tick state before
//! any body moves, so the update is synchronized rather than sequential.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{Body, NVec3, System};

/// Advance a single body by `dt` under `force`.
///
/// 1. a = F / m
/// 2. v_n+1 = v_n + a dt
/// 3. x_n+1 = x_n + v_n+1 dt
///
/// A body without positive mass is left untouched.
pub fn euler_step(body: &mut Body, force: &NVec3, dt: f64) {
    if !body.is_live() {
        return;
    }

    let a = force / body.m;
    body.v += a * dt;
    body.x += body.v * dt;
}

/// Advance the whole system by one time step using semi-implicit Euler.
/// Runs a full force pass first, then moves every body and advances `sys.t`.
pub fn semi_implicit_euler(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        // no bodies, return
        return;
    }
    let dt = params.time_step;

    // F_n from x_n for every body
    let mut f = vec![NVec3::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f);

    for (b, f) in sys.bodies.iter_mut().zip(f.iter()) {
        euler_step(b, f, dt);
    }

    sys.t += dt;
}
