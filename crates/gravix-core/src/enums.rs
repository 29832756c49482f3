//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Shape of the central potential generated by each planet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PotentialKind {
    /// Closed-form potential of a point source confined to the sphere ("2D").
    #[default]
    Flat,
    /// Series approximation of the embedded 3D potential, truncated after
    /// `terms` contributions.
    Spherical { terms: u32 },
}

/// Composition scheme of the symplectic integrator, encoded as
/// `p<order>s<stages>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionScheme {
    P2S1,
    #[default]
    P4S3,
    P4S5,
    P6S9,
    P8S15,
}

/// Lifecycle of a requested launch inside the game clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchPhase {
    /// Launch time not reached yet; no simulation effort spent.
    #[default]
    Scheduled,
    /// In flight, advanced one game-time unit per propagation.
    Flying,
    /// Detonated; awaiting removal.
    Consumed,
}

/// Why a missile detonated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetonationCause {
    /// Crossed the rim of a planet.
    Impact,
    /// Reached its scheduled end time.
    SelfDestruct,
}

impl CompositionScheme {
    /// Stage weights of the composition.
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            CompositionScheme::P2S1 => &GAMMA_P2S1,
            CompositionScheme::P4S3 => &GAMMA_P4S3,
            CompositionScheme::P4S5 => &GAMMA_P4S5,
            CompositionScheme::P6S9 => &GAMMA_P6S9,
            CompositionScheme::P8S15 => &GAMMA_P8S15,
        }
    }

    /// Number of stages.
    pub fn stages(&self) -> usize {
        self.coefficients().len()
    }
}
