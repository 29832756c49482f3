//! Flight system: lifts off scheduled launches and flies missiles chunk by
//! chunk up to the simulation horizon, emitting pings and detonations.
//!
//! One chunk covers one unit of game time and is exactly one
//! `Missile::propagate` call. Trajectory sample `i` of a chunk starting at `c`
//! sits at game time `c + (i + 1) / capacity`. A chunk `[c, stop]` owns the
//! events in `(c, stop]`, so every event up to the horizon is queued once the
//! horizon has been simulated.

use hecs::World;
use log::{debug, warn};

use gravix_core::components::{FlightState, Launch};
use gravix_core::enums::{DetonationCause, LaunchPhase};
use gravix_core::events::Observation;
use gravix_core::geo;
use gravix_core::types::GeoPoint;

use crate::missile::Missile;
use crate::observations::ObservationQueue;
use crate::oracle::Oracle;
use crate::planets::PlanetRegistry;

/// Per-run parameters handed down by the clock.
#[derive(Debug, Clone, Copy)]
pub struct FlightContext {
    /// Simulate every launch up to this game time.
    pub horizon: f64,
    /// Oracle step size for one chunk.
    pub step_size: f64,
    /// Multiplier turning relative launch speeds into absolute ones.
    pub escape_velocity: f64,
}

/// Advance every launch to `ctx.horizon`.
pub fn run<O: Oracle>(
    world: &mut World,
    oracle: &O,
    planets: &PlanetRegistry,
    ctx: &FlightContext,
    queue: &mut ObservationQueue,
) {
    for (_entity, (launch, flight, missile)) in
        world.query_mut::<(&Launch, &mut FlightState, &mut Missile)>()
    {
        if flight.phase == LaunchPhase::Scheduled {
            if launch.request.t_start >= ctx.horizon {
                continue;
            }
            lift_off(launch, flight, missile, oracle, planets, ctx, queue);
        }

        while flight.phase == LaunchPhase::Flying && flight.chunk_start < ctx.horizon {
            fly_chunk(launch, flight, missile, oracle, planets, ctx, queue);
        }
    }
}

fn lift_off<O: Oracle>(
    launch: &Launch,
    flight: &mut FlightState,
    missile: &mut Missile,
    oracle: &O,
    planets: &PlanetRegistry,
    ctx: &FlightContext,
    queue: &mut ObservationQueue,
) {
    let request = launch.request;
    let speed = request.speed * ctx.escape_velocity;
    if let Err(err) = missile.launch(
        oracle,
        planets,
        launch.planet_index,
        speed,
        request.azimuth,
    ) {
        warn!(
            "{} could not lift off from planet {}: {err}",
            launch.id, launch.planet_index
        );
        flight.phase = LaunchPhase::Consumed;
        return;
    }

    flight.phase = LaunchPhase::Flying;
    flight.chunk_start = request.t_start;
    debug!(
        "{} lifted off from planet {} at t={:.3} (speed {speed:.4})",
        launch.id, launch.planet_index, request.t_start
    );

    // Events due at or before lift-off surface at the launch position.
    let ping_time = request.ping_time();
    let end_time = request.end_time();
    if ping_time <= request.t_start && ping_time < end_time {
        if let Some(state) = missile.state() {
            emit_ping(queue, launch, request.t_start, geo::from_cartesian(state.position));
        }
        flight.ping_sent = true;
    }
    if end_time <= request.t_start {
        emit_detonation(
            queue,
            launch,
            launch.planet_index,
            request.t_start,
            DetonationCause::SelfDestruct,
        );
        flight.phase = LaunchPhase::Consumed;
    }
}

fn fly_chunk<O: Oracle>(
    launch: &Launch,
    flight: &mut FlightState,
    missile: &mut Missile,
    oracle: &O,
    planets: &PlanetRegistry,
    ctx: &FlightContext,
    queue: &mut ObservationQueue,
) {
    let start = flight.chunk_start;
    let premature = match missile.propagate(oracle, planets, ctx.step_size) {
        Ok(premature) => premature,
        Err(err) => {
            warn!("{} lost during flight: {err}", launch.id);
            flight.phase = LaunchPhase::Consumed;
            return;
        }
    };

    let capacity = oracle.config().trajectory_capacity as f64;
    let trajectory = missile.trajectory();
    let samples = trajectory.len();
    let stop = if premature {
        start + samples as f64 / capacity
    } else {
        start + 1.0
    };

    let request = launch.request;
    let ping_time = request.ping_time();
    let end_time = request.end_time();

    if !flight.ping_sent && ping_time <= stop && ping_time < end_time {
        // First sample at or after the ping time.
        let i = ((ping_time - start) * capacity).ceil() as i64 - 1;
        let i = i.clamp(0, samples as i64 - 1) as usize;
        if let Some(position) = trajectory.geo_position(i) {
            emit_ping(queue, launch, ping_time, position);
        }
        flight.ping_sent = true;
    }

    if end_time <= stop {
        emit_detonation(
            queue,
            launch,
            launch.planet_index,
            end_time,
            DetonationCause::SelfDestruct,
        );
        flight.phase = LaunchPhase::Consumed;
    } else if premature {
        let planet_index = trajectory
            .last()
            .and_then(|s| planets.closest(s.position))
            .unwrap_or(launch.planet_index);
        emit_detonation(queue, launch, planet_index, stop, DetonationCause::Impact);
        flight.phase = LaunchPhase::Consumed;
    } else {
        flight.chunk_start = stop;
    }
}

fn emit_ping(
    queue: &mut ObservationQueue,
    launch: &Launch,
    t: f64,
    position: GeoPoint,
) {
    debug!(
        "{} ping at t={t:.3}: lat {:.4}, lon {:.4}",
        launch.id, position.lat, position.lon
    );
    queue.push(Observation::Ping {
        launch: launch.id,
        t,
        position,
    });
}

fn emit_detonation(
    queue: &mut ObservationQueue,
    launch: &Launch,
    planet_index: usize,
    t: f64,
    cause: DetonationCause,
) {
    debug!(
        "{} detonated at t={t:.3} ({cause:?}, planet {planet_index})",
        launch.id
    );
    queue.push(Observation::Detonation {
        launch: launch.id,
        planet_index,
        t,
        cause,
    });
}
