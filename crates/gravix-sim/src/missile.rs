//! Missiles and their trajectory buffers.

use gravix_core::error::{GravixError, OracleError};
use gravix_core::geo;
use gravix_core::types::{GeoPoint, PhaseState};

use crate::oracle::Oracle;
use crate::planets::PlanetRegistry;

/// Samples produced by the latest propagation of a missile.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    samples: Vec<PhaseState>,
}

impl Trajectory {
    pub fn samples(&self) -> &[PhaseState] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&PhaseState> {
        self.samples.last()
    }

    /// Angular position of sample `i`.
    pub fn geo_position(&self, i: usize) -> Option<GeoPoint> {
        self.samples.get(i).map(|s| geo::from_cartesian(s.position))
    }
}

/// A missile moving on the unit sphere.
///
/// Starts uninitialized; [`Missile::set`] or [`Missile::launch`] give it a
/// state, after which it can be propagated. Failed calls leave the missile
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct Missile {
    state: Option<PhaseState>,
    trajectory: Trajectory,
}

impl Missile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Current state (the last trajectory sample after a propagation).
    pub fn state(&self) -> Option<PhaseState> {
        self.state
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Initializes from an explicit position and orientation.
    ///
    /// Both slices hold either angles (`[lat, lon]` and `[dlat, dlon]`) or
    /// Cartesian vectors (`[x, y, z]` and `[vx, vy, vz]`); mixing the two is
    /// rejected. Only the direction of the orientation matters.
    pub fn set<O: Oracle>(
        &mut self,
        oracle: &O,
        position: &[f64],
        orientation: &[f64],
        speed: f64,
    ) -> Result<(), GravixError> {
        let (point, dlat, dlon) = match (position, orientation) {
            ([lat, lon], [dlat, dlon]) => (GeoPoint::new(*lat, *lon), *dlat, *dlon),
            ([x, y, z], [vx, vy, vz]) => {
                let norm = (x * x + y * y + z * z).sqrt();
                let lat = geo::latitude(z / norm);
                let lon = geo::longitude(*x, *y);
                (
                    GeoPoint::new(lat, lon),
                    geo::latitudinal_speed(*vx, *vy, *vz, lat, lon),
                    geo::longitudinal_speed(*vx, *vy, lon),
                )
            }
            _ => {
                return Err(GravixError::InvalidArity {
                    position: position.len(),
                    orientation: orientation.len(),
                })
            }
        };

        let state = oracle.resolve_explicit(point, dlat, dlon, speed)?;
        self.reset(state);
        Ok(())
    }

    /// Places the missile on the rim of planet `planet_index`, heading away
    /// from it at `azimuth` with `speed`.
    pub fn launch<O: Oracle>(
        &mut self,
        oracle: &O,
        planets: &PlanetRegistry,
        planet_index: usize,
        speed: f64,
        azimuth: f64,
    ) -> Result<(), GravixError> {
        let planet = planets.position_of(planet_index)?;
        let state = oracle.resolve_launch(planet, speed, azimuth)?;
        self.reset(state);
        Ok(())
    }

    /// Propagates until the trajectory buffer is full or the missile reaches
    /// the rim of a planet. Returns `true` if it stopped early.
    pub fn propagate<O: Oracle>(
        &mut self,
        oracle: &O,
        planets: &PlanetRegistry,
        step_size: f64,
    ) -> Result<bool, GravixError> {
        let mut state = self.state.ok_or(GravixError::UninitializedMissile)?;
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(OracleError::InvalidStepSize(step_size).into());
        }

        let capacity = oracle.config().trajectory_capacity;
        let mut samples = Vec::with_capacity(capacity);
        let mut premature = false;
        while samples.len() < capacity && !premature {
            let (next, terminated) = oracle.propagate_step(planets.unit_vectors(), state, step_size);
            samples.push(next);
            state = next;
            premature = terminated;
        }

        self.state = Some(state);
        self.trajectory.samples = samples;
        Ok(premature)
    }

    fn reset(&mut self, state: PhaseState) {
        self.state = Some(state);
        self.trajectory.samples.clear();
    }
}
