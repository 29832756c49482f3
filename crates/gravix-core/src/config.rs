//! Oracle configuration.
//!
//! Replaces compile-time switches (potential type, buffer sizes, integration
//! scheme) with a value that is handed to the oracle when it is built.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{CompositionScheme, PotentialKind};
use crate::error::GravixError;

/// Numerical configuration of the potential and integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub potential: PotentialKind,
    /// Maximum number of samples stored per propagation call.
    pub trajectory_capacity: usize,
    /// Integrator steps between consecutive trajectory samples.
    pub integration_steps: usize,
    /// Rim radius around planets (radians).
    pub min_dist: f64,
    pub composition: CompositionScheme,
    /// Rejection-sampling budget for random planet layouts.
    pub max_sampling_draws: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            potential: PotentialKind::default(),
            trajectory_capacity: DEFAULT_TRAJECTORY_CAPACITY,
            integration_steps: DEFAULT_INTEGRATION_STEPS,
            min_dist: DEFAULT_MIN_DIST,
            composition: CompositionScheme::default(),
            max_sampling_draws: DEFAULT_MAX_SAMPLING_DRAWS,
        }
    }
}

impl OracleConfig {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GravixError> {
        let config: OracleConfig = serde_json::from_str(json)
            .map_err(|e| GravixError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GravixError> {
        if self.trajectory_capacity == 0 {
            return Err(GravixError::InvalidConfiguration(
                "trajectory_capacity must be positive".into(),
            ));
        }
        if self.integration_steps == 0 {
            return Err(GravixError::InvalidConfiguration(
                "integration_steps must be positive".into(),
            ));
        }
        if !(self.min_dist > 0.0 && self.min_dist < std::f64::consts::FRAC_PI_2) {
            return Err(GravixError::InvalidConfiguration(format!(
                "min_dist must lie in (0, pi/2), got {}",
                self.min_dist
            )));
        }
        if let PotentialKind::Spherical { terms: 0 } = self.potential {
            return Err(GravixError::InvalidConfiguration(
                "spherical potential needs at least one term".into(),
            ));
        }
        if self.max_sampling_draws == 0 {
            return Err(GravixError::InvalidConfiguration(
                "max_sampling_draws must be positive".into(),
            ));
        }
        Ok(())
    }
}
