//! ECS components for launch entities.
//!
//! Components are plain data structs with no methods.
//! Flight logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::commands::LaunchRequest;
use crate::enums::LaunchPhase;
use crate::types::LaunchId;

/// Immutable description of a submitted launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Launch {
    pub id: LaunchId,
    /// Index of the planet the missile lifts off from.
    pub planet_index: usize,
    pub request: LaunchRequest,
}

/// Mutable flight bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlightState {
    pub phase: LaunchPhase,
    /// Game time at which the next propagation chunk starts.
    pub chunk_start: f64,
    pub ping_sent: bool,
}
