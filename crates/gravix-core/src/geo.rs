//! Conversions between angular and Cartesian coordinates on the unit sphere.
//!
//! Cartesian axes follow the engine convention: a point at latitude φ and
//! longitude λ sits at `(cos φ sin λ, cos φ cos λ, sin φ)`. Longitude is
//! therefore measured with `atan2(x, y)`, x first.
//!
//! The scalar functions never validate their domain; `latitude(1.5)` is NaN.
//! The batch functions operate element-wise on equally long slices and report
//! a [`GravixError::ShapeMismatch`] otherwise.

use glam::DVec3;

use crate::error::GravixError;
use crate::types::{GeoPoint, PhaseState};

/// Latitude of a unit-sphere point from its z-component.
pub fn latitude(z: f64) -> f64 {
    z.asin()
}

/// Longitude of a unit-sphere point. Note the argument order: `atan2(x, y)`.
pub fn longitude(x: f64, y: f64) -> f64 {
    x.atan2(y)
}

/// Latitudinal speed φ̇: projection of the velocity onto the local north vector.
pub fn latitudinal_speed(vx: f64, vy: f64, vz: f64, lat: f64, lon: f64) -> f64 {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    -vx * sin_lat * sin_lon - vy * sin_lat * cos_lon + vz * cos_lat
}

/// Scaled longitudinal speed λ̇·cos φ.
///
/// This is the projection onto the local east vector, which does not depend on
/// `vz` or on latitude. It is a scaled angular rate, not λ̇ itself.
pub fn longitudinal_speed(vx: f64, vy: f64, lon: f64) -> f64 {
    let (sin_lon, cos_lon) = lon.sin_cos();
    vx * cos_lon - vy * sin_lon
}

/// Element-wise [`latitude`].
pub fn latitudes(z: &[f64]) -> Vec<f64> {
    z.iter().copied().map(latitude).collect()
}

/// Element-wise [`longitude`].
pub fn longitudes(x: &[f64], y: &[f64]) -> Result<Vec<f64>, GravixError> {
    check_shapes(x.len(), &[y])?;
    Ok(x.iter().zip(y).map(|(&x, &y)| longitude(x, y)).collect())
}

/// Element-wise [`latitudinal_speed`].
pub fn latitudinal_speeds(
    vx: &[f64],
    vy: &[f64],
    vz: &[f64],
    lat: &[f64],
    lon: &[f64],
) -> Result<Vec<f64>, GravixError> {
    check_shapes(vx.len(), &[vy, vz, lat, lon])?;
    Ok((0..vx.len())
        .map(|i| latitudinal_speed(vx[i], vy[i], vz[i], lat[i], lon[i]))
        .collect())
}

/// Element-wise [`longitudinal_speed`].
pub fn longitudinal_speeds(vx: &[f64], vy: &[f64], lon: &[f64]) -> Result<Vec<f64>, GravixError> {
    check_shapes(vx.len(), &[vy, lon])?;
    Ok((0..vx.len())
        .map(|i| longitudinal_speed(vx[i], vy[i], lon[i]))
        .collect())
}

fn check_shapes(expected: usize, others: &[&[f64]]) -> Result<(), GravixError> {
    match others.iter().find(|s| s.len() != expected) {
        Some(s) => Err(GravixError::ShapeMismatch {
            expected,
            found: s.len(),
        }),
        None => Ok(()),
    }
}

/// Unit vector for an angular position.
pub fn to_cartesian(point: GeoPoint) -> DVec3 {
    let (sin_lat, cos_lat) = point.lat.sin_cos();
    let (sin_lon, cos_lon) = point.lon.sin_cos();
    DVec3::new(cos_lat * sin_lon, cos_lat * cos_lon, sin_lat)
}

/// Angular position of a unit vector.
pub fn from_cartesian(v: DVec3) -> GeoPoint {
    GeoPoint {
        lat: latitude(v.z),
        lon: longitude(v.x, v.y),
    }
}

/// Local north (increasing latitude) unit vector at `point`.
pub fn north(point: GeoPoint) -> DVec3 {
    let (sin_lat, cos_lat) = point.lat.sin_cos();
    let (sin_lon, cos_lon) = point.lon.sin_cos();
    DVec3::new(-sin_lat * sin_lon, -sin_lat * cos_lon, cos_lat)
}

/// Local east (increasing longitude) unit vector at `point`.
pub fn east(point: GeoPoint) -> DVec3 {
    let (sin_lon, cos_lon) = point.lon.sin_cos();
    DVec3::new(cos_lon, -sin_lon, 0.0)
}

/// Great-circle distance between two points (radians).
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d = a.lat.sin() * b.lat.sin() + a.lat.cos() * b.lat.cos() * (a.lon - b.lon).cos();
    d.clamp(-1.0, 1.0).acos()
}

/// Splits a Cartesian state into its angular position and the
/// (latitudinal, scaled longitudinal) speed pair.
pub fn tangent_components(state: &PhaseState) -> (GeoPoint, f64, f64) {
    let point = from_cartesian(state.position);
    let v = state.velocity;
    let v_lat = latitudinal_speed(v.x, v.y, v.z, point.lat, point.lon);
    let v_lon = longitudinal_speed(v.x, v.y, point.lon);
    (point, v_lat, v_lon)
}
