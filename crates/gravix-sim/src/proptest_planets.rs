//! Property-based tests for the planet registry using proptest.
//!
//! These tests check that planet identity survives arbitrary removal
//! sequences and that geometry helpers behave for any valid input.

use std::collections::HashMap;

use proptest::prelude::*;

use gravix_core::error::GravixError;
use gravix_core::geo;
use gravix_core::types::{GeoPoint, PlanetId};

use crate::planets::PlanetRegistry;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-1.5f64..1.5, -3.1f64..3.1).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Removing planets in any order keeps every survivor attached to its
    /// original id and position.
    #[test]
    fn prop_removal_preserves_identity(
        positions in prop::collection::vec(geo_point(), 1..20),
        removals in prop::collection::vec(0usize..25, 0..30),
    ) {
        let mut registry = PlanetRegistry::new(positions.clone()).unwrap();
        let original: HashMap<PlanetId, GeoPoint> = registry
            .ids()
            .iter()
            .copied()
            .zip(positions.iter().copied())
            .collect();

        for index in removals {
            let len_before = registry.len();
            match registry.remove(index) {
                Ok(id) => {
                    prop_assert!(index < len_before);
                    prop_assert_eq!(registry.len(), len_before - 1);
                    prop_assert!(registry.index_of(id).is_none(), "{} still present", id);
                }
                Err(err) => {
                    prop_assert_eq!(err, GravixError::InvalidIndex { index, len: len_before });
                    prop_assert_eq!(registry.len(), len_before);
                }
            }

            prop_assert_eq!(registry.ids().len(), registry.positions().len());
            prop_assert_eq!(registry.ids().len(), registry.unit_vectors().len());
            for i in 0..registry.len() {
                let id = registry.id_of(i).unwrap();
                prop_assert_eq!(registry.position_of(i).unwrap(), original[&id]);
                prop_assert_eq!(registry.index_of(id), Some(i));
                let v = geo::to_cartesian(original[&id]);
                prop_assert!((registry.unit_vectors()[i] - v).length() < 1e-12);
            }
        }
    }

    /// Perturbation is a rotation about the planet: it keeps the distance to
    /// the planet.
    #[test]
    fn prop_perturb_preserves_distance_to_planet(
        planet in geo_point(),
        point in geo_point(),
        error in -6.3f64..6.3,
    ) {
        let registry = PlanetRegistry::new(vec![planet]).unwrap();
        let moved = registry.perturb(0, point, error).unwrap();
        let before = geo::great_circle_distance(planet, point);
        let after = geo::great_circle_distance(planet, moved);
        prop_assert!(
            (before - after).abs() < 1e-6,
            "distance changed from {} to {}", before, after
        );
    }
}
