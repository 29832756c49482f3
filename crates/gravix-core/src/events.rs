//! Observations emitted by the game clock.

use serde::{Deserialize, Serialize};

use crate::enums::DetonationCause;
use crate::types::{GeoPoint, LaunchId};

/// Something a player can observe about a missile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Observation {
    /// Mid-flight telemetry report.
    Ping {
        launch: LaunchId,
        t: f64,
        position: GeoPoint,
    },
    /// Terminal event. For an impact `planet_index` is the planet that was
    /// hit; for a self-destruct it is the planet the missile was launched from.
    Detonation {
        launch: LaunchId,
        planet_index: usize,
        t: f64,
        cause: DetonationCause,
    },
}

impl Observation {
    /// Game time at which the event happened.
    pub fn t(&self) -> f64 {
        match self {
            Observation::Ping { t, .. } | Observation::Detonation { t, .. } => *t,
        }
    }

    /// Launch that produced the event.
    pub fn launch(&self) -> LaunchId {
        match self {
            Observation::Ping { launch, .. } | Observation::Detonation { launch, .. } => *launch,
        }
    }

    pub fn is_ping(&self) -> bool {
        matches!(self, Observation::Ping { .. })
    }

    pub fn is_detonation(&self) -> bool {
        matches!(self, Observation::Detonation { .. })
    }
}
