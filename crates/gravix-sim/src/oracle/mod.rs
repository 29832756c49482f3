//! The trajectory oracle: potential, integrator, launch geometry and planet
//! placement.
//!
//! Everything above this module (registry, missiles, game clock) talks to the
//! physics only through the [`Oracle`] trait, so alternative potentials or
//! integrators can be swapped in without touching the engine.

pub mod integrator;
pub mod potential;

use glam::DVec3;
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gravix_core::config::OracleConfig;
use gravix_core::error::{GravixError, OracleError};
use gravix_core::geo;
use gravix_core::types::{GeoPoint, PhaseState};

use integrator::Integrator;

/// Numerical services needed by the engine.
pub trait Oracle {
    /// Configuration the oracle was built from.
    fn config(&self) -> &OracleConfig;

    /// Advances `state` by one trajectory sample (`integration_steps` steps of
    /// size `h`). Returns the new state and whether it stopped inside the rim
    /// of a planet.
    fn propagate_step(&self, planets: &[DVec3], state: PhaseState, h: f64) -> (PhaseState, bool);

    /// State at `position` moving with `speed` in the direction given by the
    /// angular rates `(dlat, dlon)`. Only the direction of the rates matters.
    fn resolve_explicit(
        &self,
        position: GeoPoint,
        dlat: f64,
        dlon: f64,
        speed: f64,
    ) -> Result<PhaseState, OracleError>;

    /// State on the rim of the planet at `planet`, at `azimuth` (0 = north,
    /// π/2 = west), moving radially away with `speed`.
    fn resolve_launch(
        &self,
        planet: GeoPoint,
        speed: f64,
        azimuth: f64,
    ) -> Result<PhaseState, OracleError>;

    /// `count` uniformly distributed positions with pairwise great-circle
    /// distance of at least `min_separation`.
    fn sample_random_positions(
        &self,
        count: usize,
        min_separation: f64,
        seed: Option<u64>,
    ) -> Result<Vec<GeoPoint>, OracleError>;

    /// Launch speed needed to reach the antipode of an isolated planet.
    fn escape_velocity(&self) -> f64;

    /// Number of trajectory samples a missile launched with speed `v0` from an
    /// isolated planet needs to return to it, for step size `h`.
    fn orbital_period(&self, v0: f64, h: f64) -> Result<f64, OracleError>;
}

/// Oracle for point sources on the unit sphere, integrated with a
/// compensated symplectic composition scheme.
#[derive(Debug, Clone)]
pub struct SphericalOracle {
    config: OracleConfig,
    cos_rim: f64,
}

impl SphericalOracle {
    pub fn new(config: OracleConfig) -> Result<Self, GravixError> {
        config.validate()?;
        let cos_rim = config.min_dist.cos();
        Ok(Self { config, cos_rim })
    }

    /// Speed of a circular orbit at angular radius `r` around an isolated
    /// planet.
    pub fn small_circle_velocity(&self, r: f64) -> f64 {
        potential::small_circle_velocity(self.config.potential, r)
    }

    fn integrator<'a>(&self, planets: &'a [DVec3]) -> Integrator<'a> {
        Integrator {
            kind: self.config.potential,
            gamma: self.config.composition.coefficients(),
            planets,
        }
    }
}

impl Default for SphericalOracle {
    fn default() -> Self {
        let config = OracleConfig::default();
        let cos_rim = config.min_dist.cos();
        Self { config, cos_rim }
    }
}

impl Oracle for SphericalOracle {
    fn config(&self) -> &OracleConfig {
        &self.config
    }

    fn propagate_step(&self, planets: &[DVec3], state: PhaseState, h: f64) -> (PhaseState, bool) {
        let outcome = self.integrator(planets).run(
            state,
            h,
            self.config.integration_steps,
            self.cos_rim,
        );
        (outcome.state, outcome.terminated)
    }

    fn resolve_explicit(
        &self,
        position: GeoPoint,
        dlat: f64,
        dlon: f64,
        speed: f64,
    ) -> Result<PhaseState, OracleError> {
        let inputs = [position.lat, position.lon, dlat, dlon, speed];
        if inputs.iter().any(|v| !v.is_finite()) {
            return Err(OracleError::NonFinite);
        }
        let norm = dlat.hypot(dlon);
        if norm == 0.0 {
            return Err(OracleError::DegenerateOrientation);
        }

        let direction = (dlat * geo::north(position) + dlon * geo::east(position)) / norm;
        Ok(PhaseState::new(
            geo::to_cartesian(position),
            speed * direction,
        ))
    }

    fn resolve_launch(
        &self,
        planet: GeoPoint,
        speed: f64,
        azimuth: f64,
    ) -> Result<PhaseState, OracleError> {
        if !(planet.lat.is_finite() && planet.lon.is_finite() && azimuth.is_finite()) {
            return Err(OracleError::NonFinite);
        }

        // Rotation taking the north pole to the planet.
        let (sin_lat, cos_lat) = planet.lat.sin_cos();
        let (sin_lon, cos_lon) = planet.lon.sin_cos();
        let rows = [
            DVec3::new(-cos_lon, -sin_lat * sin_lon, cos_lat * sin_lon),
            DVec3::new(sin_lon, -sin_lat * cos_lon, cos_lat * cos_lon),
            DVec3::new(0.0, cos_lat, sin_lat),
        ];
        let rotate = |v: DVec3| DVec3::new(rows[0].dot(v), rows[1].dot(v), rows[2].dot(v));

        let (sin_r, cos_r) = self.config.min_dist.sin_cos();
        let (sin_psi, cos_psi) = azimuth.sin_cos();
        let x = rotate(DVec3::new(sin_r * sin_psi, sin_r * cos_psi, cos_r));
        let v = rotate(DVec3::new(cos_r * sin_psi, cos_r * cos_psi, -sin_r));

        let start = geo::from_cartesian(x);
        let dlat = v.dot(geo::north(start));
        let dlon = v.dot(geo::east(start));
        self.resolve_explicit(start, dlat, dlon, speed)
    }

    fn sample_random_positions(
        &self,
        count: usize,
        min_separation: f64,
        seed: Option<u64>,
    ) -> Result<Vec<GeoPoint>, OracleError> {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let budget = self.config.max_sampling_draws;
        let mut draws = 0u32;
        let mut points: Vec<GeoPoint> = Vec::with_capacity(count);

        while points.len() < count {
            if draws >= budget {
                return Err(OracleError::SamplingExhausted { draws });
            }
            draws += 1;

            let candidate = GeoPoint::new(
                (2.0 * rng.gen::<f64>() - 1.0).asin(),
                std::f64::consts::PI * (2.0 * rng.gen::<f64>() - 1.0),
            );
            if points
                .iter()
                .all(|p| geo::great_circle_distance(candidate, *p) >= min_separation)
            {
                points.push(candidate);
            }
        }

        trace!("placed {count} positions after {draws} draws");
        Ok(points)
    }

    fn escape_velocity(&self) -> f64 {
        potential::escape_velocity(self.config.potential, self.config.min_dist)
    }

    fn orbital_period(&self, v0: f64, h: f64) -> Result<f64, OracleError> {
        if !(h.is_finite() && h > 0.0) {
            return Err(OracleError::InvalidStepSize(h));
        }
        if !v0.is_finite() {
            return Err(OracleError::NonFinite);
        }

        let (sin_r, cos_r) = self.config.min_dist.sin_cos();
        let planets = [DVec3::Y];
        let integrator = self.integrator(&planets);

        let mut next = PhaseState::new(
            DVec3::new(0.0, cos_r, sin_r),
            DVec3::new(0.0, -v0 * sin_r, v0 * cos_r),
        );
        let mut err = PhaseState::default();
        let mut prev;
        let mut steps = 0u64;
        loop {
            prev = next;
            integrator.step(&mut next, &mut err, h);
            steps += 1;
            if potential::min_dist(next.position, &planets) >= self.cos_rim {
                break;
            }
        }

        // Interpolate the last step assuming constant acceleration.
        let s = prev.position.y.clamp(-1.0, 1.0).acos() - self.config.min_dist;
        let a = next.velocity.length() - prev.velocity.length();
        let dt = if s > 0.0 && a > 0.0 {
            (2.0 * s / a).sqrt().min(1.0)
        } else {
            0.0
        };

        Ok((steps as f64 + dt) / self.config.integration_steps as f64)
    }
}
