//! Launch scheduler: owns the hecs world holding one entity per launch.

use hecs::{Entity, World};
use log::debug;

use gravix_core::commands::LaunchRequest;
use gravix_core::components::{FlightState, Launch};
use gravix_core::enums::LaunchPhase;
use gravix_core::types::LaunchId;

use crate::missile::Missile;

/// Launch entities plus the id allocator.
///
/// Every launch entity carries `Launch`, `FlightState` and `Missile`.
#[derive(Default)]
pub struct LaunchScheduler {
    world: World,
    next_id: u64,
    despawn_buffer: Vec<Entity>,
}

impl LaunchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a scheduled launch. Ids are allocated in submission order.
    pub fn submit(&mut self, planet_index: usize, request: LaunchRequest) -> LaunchId {
        let id = LaunchId(self.next_id);
        self.next_id += 1;
        self.world.spawn((
            Launch {
                id,
                planet_index,
                request,
            },
            FlightState {
                phase: LaunchPhase::Scheduled,
                chunk_start: request.t_start,
                ping_sent: false,
            },
            Missile::new(),
        ));
        debug!(
            "scheduled {id} from planet {planet_index} at t={:.3}",
            request.t_start
        );
        id
    }

    /// Number of launches not yet removed.
    pub fn active(&self) -> usize {
        self.world.len() as usize
    }

    /// Phase of a launch, or `None` once it has been removed.
    pub fn phase_of(&self, id: LaunchId) -> Option<LaunchPhase> {
        let mut query = self.world.query::<(&Launch, &FlightState)>();
        let phase = query
            .iter()
            .find(|(_, (launch, _))| launch.id == id)
            .map(|(_, (_, flight))| flight.phase);
        phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// World and despawn buffer, borrowed together for the systems.
    pub fn parts_mut(&mut self) -> (&mut World, &mut Vec<Entity>) {
        (&mut self.world, &mut self.despawn_buffer)
    }
}
