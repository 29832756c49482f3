//! Potential of a set of point sources on the unit sphere.
//!
//! Planets are given as Cartesian unit vectors. The "flat" potential is the
//! closed-form Green's function of the sphere; the "spherical" one is a
//! truncated series for the field of a source embedded in 3D and wrapped
//! around the sphere.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use gravix_core::enums::PotentialKind;

/// `sin(x)/x`, continuous at zero.
pub fn sinc(x: f64) -> f64 {
    if x.abs() > 0.0 {
        x.sin() / x
    } else {
        1.0
    }
}

/// Gradient of the potential at `q`.
pub fn gradient(kind: PotentialKind, q: DVec3, planets: &[DVec3]) -> DVec3 {
    planets.iter().fold(DVec3::ZERO, |acc, &planet| {
        let d = q.dot(planet);
        let s = match kind {
            PotentialKind::Flat => -1.0 / (1.0 - d),
            PotentialKind::Spherical { terms } => force_3d(d.clamp(-1.0, 1.0).acos() - PI, terms),
        };
        acc + s * planet
    })
}

/// Cosine of the smallest angle between `q` and any planet; `-1` without
/// planets.
pub fn min_dist(q: DVec3, planets: &[DVec3]) -> f64 {
    planets
        .iter()
        .map(|planet| q.dot(*planet))
        .fold(-1.0, f64::max)
}

/// Speed needed to reach the antipode from the rim of an isolated planet.
pub fn escape_velocity(kind: PotentialKind, rim: f64) -> f64 {
    let pot = match kind {
        PotentialKind::Flat => -2.0 * (rim / 2.0).sin().ln(),
        PotentialKind::Spherical { terms } => potential_3d(rim, terms),
    };
    (2.0 * pot).sqrt()
}

/// Speed of a circular orbit at angular radius `r` around an isolated planet.
pub fn small_circle_velocity(kind: PotentialKind, r: f64) -> f64 {
    match kind {
        PotentialKind::Flat => ((1.0 + r.cos()) / r.cos().abs()).sqrt(),
        PotentialKind::Spherical { terms } => {
            r.sin() * (-force_3d(r - PI, terms) / r.cos().abs()).sqrt()
        }
    }
}

fn potential_3d(x: f64, terms: u32) -> f64 {
    // smallest contributions first
    let acc: f64 = (0..terms)
        .map(|i| {
            let i = f64::from(i);
            1.0 / (TAU * i + x) + 1.0 / (TAU * (i + 1.0) - x) - 4.0 / (TAU * (2.0 * i + 1.0))
        })
        .sum();
    acc / (2.0 * TAU)
}

fn force_3d(x: f64, terms: u32) -> f64 {
    let acc: f64 = (0..terms)
        .map(|i| {
            let k = f64::from(2 * (terms - 1 - i) + 1);
            k / (PI * PI * k * k - x * x).powi(2)
        })
        .sum();
    -acc / sinc(x)
}
