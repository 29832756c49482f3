//! Planet registry: an indexed collection of planets with stable ids.
//!
//! Planets are addressed by their current storage index. Removal swap-removes
//! (the last planet moves into the freed slot), so indices shift while ids
//! stay attached to their planet for its whole lifetime.

use glam::{DQuat, DVec3};
use log::debug;

use gravix_core::error::GravixError;
use gravix_core::geo;
use gravix_core::types::{GeoPoint, PlanetId};

use crate::oracle::Oracle;

/// Ordered planet collection. `ids`, `positions` and `unit_vectors` always
/// have the same length and describe the same planet at the same index.
#[derive(Debug, Clone, Default)]
pub struct PlanetRegistry {
    ids: Vec<PlanetId>,
    positions: Vec<GeoPoint>,
    unit_vectors: Vec<DVec3>,
}

impl PlanetRegistry {
    /// One planet per position, with ids `0..n-1` in input order.
    pub fn new(positions: Vec<GeoPoint>) -> Result<Self, GravixError> {
        let count = positions.len();
        let alloc_err = |_| GravixError::Allocation { count };

        let mut ids = Vec::new();
        ids.try_reserve_exact(count).map_err(alloc_err)?;
        let mut unit_vectors = Vec::new();
        unit_vectors.try_reserve_exact(count).map_err(alloc_err)?;

        for (i, p) in positions.iter().enumerate() {
            ids.push(planet_id(i, count)?);
            unit_vectors.push(geo::to_cartesian(*p));
        }

        Ok(Self {
            ids,
            positions,
            unit_vectors,
        })
    }

    /// `count` randomly placed planets, pairwise at least `min_separation`
    /// apart. A fixed `seed` gives a reproducible layout.
    pub fn random<O: Oracle>(
        oracle: &O,
        count: usize,
        min_separation: Option<f64>,
        seed: Option<u64>,
    ) -> Result<Self, GravixError> {
        if count < 1 {
            return Err(GravixError::InvalidConfiguration(
                "at least one planet is required".into(),
            ));
        }
        let min_separation = match min_separation {
            Some(s) if s.is_finite() => s,
            Some(s) => {
                return Err(GravixError::InvalidConfiguration(format!(
                    "minimum separation must be finite, got {s}"
                )))
            }
            None => {
                return Err(GravixError::InvalidConfiguration(
                    "minimum separation is required for random placement".into(),
                ))
            }
        };

        let positions = oracle.sample_random_positions(count, min_separation, seed)?;
        debug!("placed {count} random planets (min separation {min_separation})");
        Self::new(positions)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position_of(&self, index: usize) -> Result<GeoPoint, GravixError> {
        self.check_index(index)?;
        Ok(self.positions[index])
    }

    pub fn id_of(&self, index: usize) -> Result<PlanetId, GravixError> {
        self.check_index(index)?;
        Ok(self.ids[index])
    }

    /// Current index of the planet with `id`, if it still exists.
    pub fn index_of(&self, id: PlanetId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    pub fn ids(&self) -> &[PlanetId] {
        &self.ids
    }

    pub fn positions(&self) -> &[GeoPoint] {
        &self.positions
    }

    /// Cartesian unit vectors in index order.
    pub fn unit_vectors(&self) -> &[DVec3] {
        &self.unit_vectors
    }

    /// Swap-removes the planet at `index` and returns its id.
    pub fn remove(&mut self, index: usize) -> Result<PlanetId, GravixError> {
        self.check_index(index)?;
        self.positions.swap_remove(index);
        self.unit_vectors.swap_remove(index);
        let id = self.ids.swap_remove(index);
        debug!("removed {id} from index {index}, {} planets left", self.len());
        Ok(id)
    }

    /// Rotates `point` by `angular_error` radians about the axis through the
    /// planet at `index`. The distance to the planet is preserved.
    pub fn perturb(
        &self,
        index: usize,
        point: GeoPoint,
        angular_error: f64,
    ) -> Result<GeoPoint, GravixError> {
        self.check_index(index)?;
        let rotation = DQuat::from_axis_angle(self.unit_vectors[index], angular_error);
        Ok(geo::from_cartesian(rotation * geo::to_cartesian(point)))
    }

    /// Index of the planet closest to the Cartesian point `q`.
    pub fn closest(&self, q: DVec3) -> Option<usize> {
        self.unit_vectors
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| q.dot(**a).total_cmp(&q.dot(**b)))
            .map(|(i, _)| i)
    }

    fn check_index(&self, index: usize) -> Result<(), GravixError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(GravixError::InvalidIndex {
                index,
                len: self.len(),
            })
        }
    }
}

/// Id for the planet created at `index`; fails once ids no longer fit.
pub(crate) fn planet_id(index: usize, count: usize) -> Result<PlanetId, GravixError> {
    u32::try_from(index)
        .map(PlanetId)
        .map_err(|_| GravixError::Allocation { count })
}
