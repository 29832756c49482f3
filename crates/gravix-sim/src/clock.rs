//! Game clock: the discrete event engine.
//!
//! `GameClock` owns the planet registry, the oracle and the launch world.
//! Callers submit launch requests and pull observations tick by tick. The
//! clock is completely headless and deterministic for fixed planets and
//! requests.
//!
//! One tick spans one unit of game time, which corresponds to `dt` of
//! integrated time. Launches are only simulated as far as the clock has been
//! asked to look.

use std::iter::FusedIterator;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use gravix_core::commands::LaunchRequest;
use gravix_core::config::OracleConfig;
use gravix_core::constants::DEFAULT_GAME_DT;
use gravix_core::enums::LaunchPhase;
use gravix_core::error::GravixError;
use gravix_core::events::Observation;
use gravix_core::types::LaunchId;

use crate::observations::ObservationQueue;
use crate::oracle::{Oracle, SphericalOracle};
use crate::planets::PlanetRegistry;
use crate::scheduler::LaunchScheduler;
use crate::systems;
use crate::systems::flight::FlightContext;

/// Configuration for starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Integrated time per tick.
    pub dt: f64,
    pub oracle: OracleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_GAME_DT,
            oracle: OracleConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GravixError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| GravixError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GravixError> {
        validate_dt(self.dt)?;
        self.oracle.validate()
    }
}

fn validate_dt(dt: f64) -> Result<(), GravixError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(GravixError::InvalidConfiguration(format!(
            "dt must be positive and finite, got {dt}"
        )))
    }
}

/// The game clock. Owns the planets, the oracle and all launches.
pub struct GameClock<O: Oracle = SphericalOracle> {
    oracle: O,
    planets: PlanetRegistry,
    scheduler: LaunchScheduler,
    queue: ObservationQueue,
    tick: u64,
    step_size: f64,
    escape_velocity: f64,
}

impl GameClock<SphericalOracle> {
    /// Create a clock using the built-in oracle.
    pub fn new(planets: PlanetRegistry, config: GameConfig) -> Result<Self, GravixError> {
        config.validate()?;
        let oracle = SphericalOracle::new(config.oracle)?;
        Self::with_oracle(planets, config.dt, oracle)
    }
}

impl<O: Oracle> GameClock<O> {
    /// Create a clock around a caller-supplied oracle.
    pub fn with_oracle(planets: PlanetRegistry, dt: f64, oracle: O) -> Result<Self, GravixError> {
        validate_dt(dt)?;
        let config = oracle.config();
        let step_size = dt / (config.integration_steps * config.trajectory_capacity) as f64;
        let escape_velocity = oracle.escape_velocity();
        debug!(
            "game clock: {} planets, dt={dt}, step size {step_size:e}, v_esc {escape_velocity:.4}",
            planets.len()
        );

        Ok(Self {
            oracle,
            planets,
            scheduler: LaunchScheduler::new(),
            queue: ObservationQueue::new(),
            tick: 0,
            step_size,
            escape_velocity,
        })
    }

    /// Schedule a launch from the planet at `planet_index`.
    ///
    /// Launches cannot start before the current tick, and the launch speed
    /// must stay finite once scaled by the escape velocity.
    pub fn request_launch(
        &mut self,
        planet_index: usize,
        request: LaunchRequest,
    ) -> Result<LaunchId, GravixError> {
        self.planets.position_of(planet_index)?;
        request.validate()?;

        let now = self.tick as f64;
        if request.t_start < now {
            return Err(GravixError::InvalidConfiguration(format!(
                "launch time {} is before the current tick {now}",
                request.t_start
            )));
        }
        let speed = request.speed * self.escape_velocity;
        if !speed.is_finite() {
            return Err(GravixError::InvalidConfiguration(format!(
                "launch speed {} overflows",
                request.speed
            )));
        }

        Ok(self.scheduler.submit(planet_index, request))
    }

    /// Either return the next observation due by the end of the current tick
    /// or, if none is left, advance the clock by one tick and return `None`.
    pub fn observe_or_tick(&mut self) -> Option<Observation> {
        let horizon = (self.tick + 1) as f64;
        self.run_systems(horizon);

        if let Some(observation) = self.queue.pop_until(horizon) {
            return Some(observation);
        }

        self.tick += 1;
        trace!("tick {} ({} launches active)", self.tick, self.scheduler.active());
        None
    }

    /// Lazy iterator over the observations of the current tick. The clock
    /// advances when the iterator is exhausted; dropping it earlier leaves
    /// the remaining observations queued.
    pub fn observations(&mut self) -> TickObservations<'_, O> {
        TickObservations {
            clock: self,
            done: false,
        }
    }

    /// Collect all observations of the current tick and advance the clock.
    pub fn tick(&mut self) -> Vec<Observation> {
        self.observations().collect()
    }

    /// Number of completed ticks.
    pub fn time(&self) -> u64 {
        self.tick
    }

    pub fn planets(&self) -> &PlanetRegistry {
        &self.planets
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Oracle step size used for every flight chunk.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Launches that have not been removed yet.
    pub fn active_launches(&self) -> usize {
        self.scheduler.active()
    }

    /// Observations simulated but not yet handed out.
    pub fn pending_observations(&self) -> usize {
        self.queue.len()
    }

    /// Phase of a launch, or `None` once it has detonated and been removed.
    pub fn launch_phase(&self, id: LaunchId) -> Option<LaunchPhase> {
        self.scheduler.phase_of(id)
    }

    fn run_systems(&mut self, horizon: f64) {
        let ctx = FlightContext {
            horizon,
            step_size: self.step_size,
            escape_velocity: self.escape_velocity,
        };
        let (world, despawn_buffer) = self.scheduler.parts_mut();
        // 1. Lift-off and flight up to the horizon
        systems::flight::run(world, &self.oracle, &self.planets, &ctx, &mut self.queue);
        // 2. Remove detonated launches
        systems::cleanup::run(world, despawn_buffer);
    }
}

/// Observations of one tick, produced by repeated
/// [`GameClock::observe_or_tick`] calls.
pub struct TickObservations<'a, O: Oracle> {
    clock: &'a mut GameClock<O>,
    done: bool,
}

impl<O: Oracle> Iterator for TickObservations<'_, O> {
    type Item = Observation;

    fn next(&mut self) -> Option<Observation> {
        if self.done {
            return None;
        }
        let next = self.clock.observe_or_tick();
        self.done = next.is_none();
        next
    }
}

impl<O: Oracle> FusedIterator for TickObservations<'_, O> {}
