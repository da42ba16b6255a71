pub mod simulation;
pub mod configuration;
pub mod persistence;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, System, NVec3};
pub use simulation::params::{Parameters, GRAVITY_CONST, COLLISION_DISTANCE, MASS_MEAN, MASS_STD_DEV};
pub use simulation::vector::distance;
pub use simulation::forces::{ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::integrator::{euler_step, semi_implicit_euler};
pub use simulation::boundary::{reflect, reflect_all};
pub use simulation::collisions::{resolve_collisions, resolve_system, MergeEvent};
pub use simulation::scenario::{Scenario, TickReport};
pub use simulation::observer::{TickObserver, ProgressLog, Unobserved};
pub use simulation::engine::{Engine, RunOutcome};

pub use configuration::config::{RunConfig, ConfigError, ErrorClass};

pub use persistence::snapshot::{Snapshot, SnapshotRow, SnapshotError, INIT_FILE, FINAL_FILE};

pub use benchmark::benchmark::{bench_tick, bench_tick_curve};
