//! Launch requests submitted to the game clock.
//!
//! Requests are validated when submitted and simulated lazily once the clock
//! reaches their launch time.

use serde::{Deserialize, Serialize};

use crate::error::GravixError;

/// A scheduled missile launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Launch time (game time).
    pub t_start: f64,
    /// Delay after launch until the telemetry ping.
    pub dt_ping: f64,
    /// Delay after launch until self-destruction.
    pub dt_end: f64,
    /// Launch speed in units of the escape velocity.
    pub speed: f64,
    /// Azimuth on the planet rim (radians, 0 = north).
    pub azimuth: f64,
}

impl LaunchRequest {
    /// Absolute time of the ping.
    pub fn ping_time(&self) -> f64 {
        self.t_start + self.dt_ping
    }

    /// Absolute time of self-destruction.
    pub fn end_time(&self) -> f64 {
        self.t_start + self.dt_end
    }

    /// Rejects non-finite fields. Non-positive delays are allowed.
    pub fn validate(&self) -> Result<(), GravixError> {
        let fields = [
            ("t_start", self.t_start),
            ("dt_ping", self.dt_ping),
            ("dt_end", self.dt_end),
            ("speed", self.speed),
            ("azimuth", self.azimuth),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, v)) => Err(GravixError::InvalidConfiguration(format!(
                "launch request field {name} is not finite ({v})"
            ))),
            None => Ok(()),
        }
    }
}
