//! Provider seams for the planning core.
//!
//! The core consumes distances and rest-area candidates through these traits
//! so routing backends and discovery services can be swapped without touching
//! the scheduling logic.

use crate::route::{Coordinate, RestArea, Route};

/// Provides the travel distance between two points, in meters.
///
/// Implementations may be geometric (great-circle) or backed by a real road
/// network; the scheduling core does not care which.
pub trait DistanceProvider {
    fn distance_meters(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// Supplies candidate rest areas along a computed route.
///
/// Discovery (and its failure/retry semantics) is owned by the
/// implementation; the core only reads the returned candidates.
pub trait RestAreaProvider {
    fn rest_areas_for(&self, route: &Route) -> Vec<RestArea>;
}
