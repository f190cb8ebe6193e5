//! Route geometry as a decoded coordinate sequence.
//!
//! Stores latitude/longitude points directly for internal processing;
//! encoding to/from compact polyline formats belongs at API boundaries, not
//! in the planning core. On top of the raw points this adds along-route
//! measurement: total length, interpolation to a point at a given distance,
//! and projection of an off-route point back onto the route.

use serde::{Deserialize, Serialize};

use crate::haversine::haversine_meters;
use crate::route::Coordinate;

/// A route geometry as an ordered sequence of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    points: Vec<Coordinate>,
}

impl RouteGeometry {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Total length in meters, summed over consecutive point pairs.
    pub fn length_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_meters(pair[0], pair[1]))
            .sum()
    }

    /// The point at `distance_m` meters from the start, linearly
    /// interpolated within the containing segment. Distances beyond the
    /// ends clamp to the first/last point. `None` for an empty geometry.
    pub fn point_at(&self, distance_m: f64) -> Option<Coordinate> {
        let first = *self.points.first()?;
        if distance_m <= 0.0 {
            return Some(first);
        }

        let mut covered = 0.0;
        for pair in self.points.windows(2) {
            let segment_len = haversine_meters(pair[0], pair[1]);
            if covered + segment_len >= distance_m && segment_len > 0.0 {
                let t = (distance_m - covered) / segment_len;
                return Some(Coordinate::new(
                    pair[0].lat + (pair[1].lat - pair[0].lat) * t,
                    pair[0].lng + (pair[1].lng - pair[0].lng) * t,
                ));
            }
            covered += segment_len;
        }

        self.points.last().copied()
    }

    /// Project a point onto the route and return its along-route distance
    /// in meters from the start.
    ///
    /// Uses an equirectangular approximation per segment, which is accurate
    /// enough for the short perpendicular offsets of near-route facilities.
    pub fn locate(&self, point: Coordinate) -> f64 {
        let mut best_along = 0.0;
        let mut best_offset = f64::INFINITY;
        let mut covered = 0.0;

        for pair in self.points.windows(2) {
            let segment_len = haversine_meters(pair[0], pair[1]);
            let (t, offset) = project_on_segment(pair[0], pair[1], point);
            if offset < best_offset {
                best_offset = offset;
                best_along = covered + t * segment_len;
            }
            covered += segment_len;
        }

        best_along
    }
}

/// Project `point` onto the segment `a`..`b` in a local planar frame.
///
/// Returns the clamped segment parameter in [0, 1] and the offset from the
/// segment in meters.
fn project_on_segment(a: Coordinate, b: Coordinate, point: Coordinate) -> (f64, f64) {
    let mean_lat = (a.lat + b.lat).to_radians() / 2.0;
    let scale = mean_lat.cos();

    let to_xy = |c: Coordinate| -> (f64, f64) {
        ((c.lng - a.lng) * scale, c.lat - a.lat)
    };

    let (bx, by) = to_xy(b);
    let (px, py) = to_xy(point);

    let len_sq = bx * bx + by * by;
    let t = if len_sq > 0.0 {
        ((px * bx + py * by) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let nearest = Coordinate::new(a.lat + (b.lat - a.lat) * t, a.lng + (b.lng - a.lng) * t);
    (t, haversine_meters(point, nearest))
}
