//! Great-circle distance engine.
//!
//! Haversine formula on a spherical Earth model. Less accurate than a road
//! network but deterministic and always available.

use crate::route::Coordinate;
use crate::traits::DistanceProvider;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the haversine distance between two points in meters.
pub fn haversine_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Great-circle distance provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl DistanceProvider for GreatCircle {
    fn distance_meters(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_meters(from, to)
    }
}
