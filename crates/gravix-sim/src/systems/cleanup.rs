//! Cleanup system: removes launches that have detonated.

use hecs::{Entity, World};

use gravix_core::components::FlightState;
use gravix_core::enums::LaunchPhase;

/// Despawn consumed launches. Returns how many were removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, flight) in world.query_mut::<&FlightState>() {
        if flight.phase == LaunchPhase::Consumed {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
