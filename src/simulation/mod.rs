pub mod states;
pub mod vector;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod boundary;
pub mod collisions;
pub mod sampling;
pub mod scenario;
pub mod observer;
pub mod engine;
