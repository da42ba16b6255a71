//! Collision detection and resolution through inelastic merging
//!
//! Two bodies collide when they are closer than [`COLLISION_DISTANCE`].
//! The lower-indexed body absorbs the higher-indexed one:
//! - mass is summed
//! - velocity is summed component-wise (not mass-weighted)
//! - position is left where the survivor was
//!
//! Note: summing velocities does not conserve momentum. Snapshots are
//! reproduced against this rule; changing it changes every run.

use super::params::COLLISION_DISTANCE;
use super::states::{Body, BodyId, System};
use super::vector::distance;

/// One absorption performed by [`resolve_collisions`]
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    pub survivor: BodyId,
    pub absorbed: BodyId,
    pub separation: f64, // distance at the moment of the merge
}

/// True when `a` and `b` are inside the collision threshold
pub fn collides(a: &Body, b: &Body) -> bool {
    distance(a, b) < COLLISION_DISTANCE
}

/// Fold `absorbed` into `survivor`
pub fn absorb(survivor: &mut Body, absorbed: &Body) {
    survivor.m += absorbed.m;
    survivor.v += absorbed.v;
}

/// Scan every pair (i, j), i < j, in ascending order and merge colliding pairs.
///
/// After a removal the inner cursor stays on `j`, which now holds the next
/// body, so a survivor can absorb several partners in one pass. Each removal
/// shifts the tail of the collection left: O(n) per merge.
///
/// On return no two remaining bodies are closer than the threshold, since
/// merging never moves the survivor.
pub fn resolve_collisions(bodies: &mut Vec<Body>) -> Vec<MergeEvent> {
    let mut events = Vec::new();

    let mut i = 0;
    while i < bodies.len() {
        let mut j = i + 1;
        while j < bodies.len() {
            let separation = distance(&bodies[i], &bodies[j]);
            if separation < COLLISION_DISTANCE {
                let absorbed = bodies.remove(j);
                absorb(&mut bodies[i], &absorbed);
                events.push(MergeEvent {
                    survivor: bodies[i].id,
                    absorbed: absorbed.id,
                    separation,
                });
                // re-examine the body that slid into slot j
            } else {
                j += 1;
            }
        }
        i += 1;
    }

    events
}

/// [`resolve_collisions`] over a whole system
pub fn resolve_system(sys: &mut System) -> Vec<MergeEvent> {
    resolve_collisions(&mut sys.bodies)
}
