//! Core data model for truck route planning.
//!
//! All types are plain values: a `Route` is built once per calculation and
//! the optimizer returns a new enriched copy rather than mutating in place.

use serde::{Deserialize, Serialize};

use crate::geometry::RouteGeometry;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude must be within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Physical parameters of the truck, used for speed-limit and road
/// restriction lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Height in meters.
    pub height: f64,
    /// Width in meters.
    pub width: f64,
    /// Length in meters.
    pub length: f64,
    /// Gross weight in tonnes.
    pub weight: f64,
    /// Number of axles.
    pub axle_count: u32,
}

impl VehicleProfile {
    /// All dimensions and the axle count must be strictly positive.
    pub fn is_valid(&self) -> bool {
        self.height > 0.0
            && self.width > 0.0
            && self.length > 0.0
            && self.weight > 0.0
            && self.axle_count > 0
            && [self.height, self.width, self.length, self.weight]
                .iter()
                .all(|v| v.is_finite())
    }
}

impl Default for VehicleProfile {
    fn default() -> Self {
        // Typical articulated lorry.
        Self {
            height: 4.2,
            width: 2.5,
            length: 16.5,
            weight: 40.0,
            axle_count: 5,
        }
    }
}

/// A stretch of road with a uniform type and country, used to derive an
/// effective average speed for the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub road_type: String,
    pub country_code: String,
    pub length_meters: f64,
}

impl RoadSegment {
    pub fn new(road_type: &str, country_code: &str, length_meters: f64) -> Self {
        Self {
            road_type: road_type.to_string(),
            country_code: country_code.to_string(),
            length_meters,
        }
    }
}

/// Kind of regulation-mandated stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    /// Short break after the continuous-driving limit.
    RegularBreak,
    /// Long rest after the daily driving limit.
    DailyRest,
}

/// A physical stopping facility along the route, supplied by an external
/// discovery provider. Read-only to the planning core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestArea {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    /// Position along the route, in meters from the origin.
    pub distance_along_route_m: f64,
}

/// A mandated stop inserted by the segmenter.
///
/// The optimizer is the only component that fills in `rest_area`; everything
/// else treats scheduled breaks as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBreak {
    #[serde(rename = "type")]
    pub kind: BreakKind,
    /// Wall-clock start of the stop, unix seconds.
    pub start_time: i64,
    pub duration_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_area: Option<RestArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Success,
    Error,
}

/// A fully timed itinerary between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub status: RouteStatus,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub distance_meters: f64,
    /// Pure driving time, seconds.
    pub duration_secs: f64,
    /// Driving time plus all scheduled stops, seconds.
    pub duration_with_breaks_secs: f64,
    pub breaks: Vec<ScheduledBreak>,
    /// Unix seconds.
    pub departure_time: i64,
    /// Unix seconds.
    pub arrival_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Route {
    /// An error-status route carrying a human-readable message and no breaks.
    pub fn failed(
        origin: Coordinate,
        destination: Coordinate,
        departure_time: i64,
        message: &str,
    ) -> Self {
        Self {
            status: RouteStatus::Error,
            origin,
            destination,
            distance_meters: 0.0,
            duration_secs: 0.0,
            duration_with_breaks_secs: 0.0,
            breaks: Vec::new(),
            departure_time,
            arrival_time: departure_time,
            geometry: None,
            error_message: Some(message.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RouteStatus::Success
    }
}
