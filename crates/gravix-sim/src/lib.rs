//! Simulation engine for gravix.
//!
//! Provides the trajectory oracle, the planet registry, missiles and the
//! game clock that turns launch requests into a time-ordered stream of
//! observations. Launches live in a hecs ECS world and are advanced by
//! systems, lazily, as far as the clock has been asked to look.

pub mod clock;
pub mod missile;
pub mod observations;
pub mod oracle;
pub mod planets;
pub mod scheduler;
pub mod systems;

pub use clock::{GameClock, GameConfig, TickObservations};
pub use gravix_core as core;
pub use missile::{Missile, Trajectory};
pub use oracle::{Oracle, SphericalOracle};
pub use planets::PlanetRegistry;


#[cfg(test)]
mod proptest_planets;
