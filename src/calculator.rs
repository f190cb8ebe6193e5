//! Truck route calculation facade.
//!
//! Wires the distance engine, speed-limit table and driving rules into the
//! public `calculate_route` entry point. The calculator holds only
//! read-only configuration, so one instance can serve concurrent
//! calculations; `calculate_routes` runs a batch in parallel.

use rayon::prelude::*;
use thiserror::Error;

use crate::geometry::RouteGeometry;
use crate::haversine::GreatCircle;
use crate::route::{Coordinate, RoadSegment, Route, RouteStatus, VehicleProfile};
use crate::schedule::{segment, DrivingRules};
use crate::speed::SpeedLimitTable;
use crate::timing::TripTiming;
use crate::traits::DistanceProvider;

/// Input rejected before any route is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("invalid vehicle profile: {0}")]
    InvalidVehicle(String),
}

/// Trip profile assumed when no per-segment road data is available.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorOptions {
    /// Road type dominating the trip.
    pub dominant_road_type: String,
    /// Country for speed-limit lookups; `None` uses the default table.
    pub country_code: Option<String>,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            dominant_road_type: "motorway".to_string(),
            country_code: None,
        }
    }
}

/// One trip request, for batch calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub vehicle: VehicleProfile,
    /// Unix seconds.
    pub departure_time: i64,
}

/// Computes legally-compliant truck schedules between two points.
#[derive(Debug, Clone)]
pub struct TruckRouteCalculator<D = GreatCircle> {
    distance: D,
    speeds: SpeedLimitTable,
    rules: DrivingRules,
    options: CalculatorOptions,
}

impl TruckRouteCalculator<GreatCircle> {
    /// Great-circle distances, default European speed limits and EU driving
    /// rules.
    pub fn new() -> Self {
        Self::with_providers(
            GreatCircle,
            SpeedLimitTable::default(),
            DrivingRules::default(),
            CalculatorOptions::default(),
        )
    }
}

impl Default for TruckRouteCalculator<GreatCircle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DistanceProvider> TruckRouteCalculator<D> {
    pub fn with_providers(
        distance: D,
        speeds: SpeedLimitTable,
        rules: DrivingRules,
        options: CalculatorOptions,
    ) -> Self {
        Self {
            distance,
            speeds,
            rules,
            options,
        }
    }

    /// Effective speed limit in km/h, for diagnostics and tests.
    pub fn speed_limit(&self, road_type: &str, country_code: &str) -> f64 {
        self.speeds.limit(road_type, country_code)
    }

    pub fn driving_rules(&self) -> &DrivingRules {
        &self.rules
    }

    /// Compute a timed itinerary from `origin` to `destination`.
    ///
    /// Malformed input is rejected up front; an internal computation
    /// failure comes back as a route with `Error` status and a message.
    pub fn calculate_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        vehicle: &VehicleProfile,
        departure_time: i64,
    ) -> Result<Route, CalculatorError> {
        self.validate(origin, destination, vehicle)?;

        let distance_meters = self.distance.distance_meters(origin, destination);
        let country = self.options.country_code.as_deref().unwrap_or("");
        let speed_kmh = self.speeds.limit(&self.options.dominant_road_type, country);

        Ok(self.build_route(origin, destination, distance_meters, speed_kmh, departure_time))
    }

    /// Compute a timed itinerary over explicit road segments.
    ///
    /// Total distance is the sum of segment lengths and the average speed
    /// is the length-weighted mean of each segment's resolved limit.
    pub fn calculate_segmented_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        segments: &[RoadSegment],
        vehicle: &VehicleProfile,
        departure_time: i64,
    ) -> Result<Route, CalculatorError> {
        self.validate(origin, destination, vehicle)?;

        if segments.is_empty() {
            return Ok(Route::failed(
                origin,
                destination,
                departure_time,
                "no road segments supplied",
            ));
        }

        let distance_meters: f64 = segments.iter().map(|s| s.length_meters).sum();
        let weighted: f64 = segments
            .iter()
            .map(|s| self.speeds.limit(&s.road_type, &s.country_code) * s.length_meters)
            .sum();
        let speed_kmh = if distance_meters > 0.0 {
            weighted / distance_meters
        } else {
            0.0
        };

        Ok(self.build_route(origin, destination, distance_meters, speed_kmh, departure_time))
    }

    /// Calculate several independent routes in parallel.
    pub fn calculate_routes(
        &self,
        requests: &[RouteRequest],
    ) -> Vec<Result<Route, CalculatorError>>
    where
        D: Sync,
    {
        requests
            .par_iter()
            .map(|request| {
                self.calculate_route(
                    request.origin,
                    request.destination,
                    &request.vehicle,
                    request.departure_time,
                )
            })
            .collect()
    }

    fn validate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        vehicle: &VehicleProfile,
    ) -> Result<(), CalculatorError> {
        if !origin.is_valid() {
            return Err(CalculatorError::InvalidCoordinate(format!(
                "origin ({}, {}) out of range",
                origin.lat, origin.lng
            )));
        }
        if !destination.is_valid() {
            return Err(CalculatorError::InvalidCoordinate(format!(
                "destination ({}, {}) out of range",
                destination.lat, destination.lng
            )));
        }
        if !vehicle.is_valid() {
            return Err(CalculatorError::InvalidVehicle(
                "dimensions, weight and axle count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn build_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        distance_meters: f64,
        speed_kmh: f64,
        departure_time: i64,
    ) -> Route {
        if !distance_meters.is_finite() || distance_meters < 0.0 {
            return Route::failed(origin, destination, departure_time, "distance computation failed");
        }
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Route::failed(
                origin,
                destination,
                departure_time,
                "no usable speed limit for trip profile",
            );
        }

        let segmentation = segment(distance_meters, speed_kmh, departure_time, &self.rules);
        let timing = TripTiming::from_segmentation(departure_time, &segmentation);

        tracing::debug!(
            distance_km = distance_meters / 1000.0,
            speed_kmh,
            breaks = segmentation.breaks.len(),
            duration_h = timing.duration_with_breaks_secs / 3600.0,
            "calculated route"
        );

        Route {
            status: RouteStatus::Success,
            origin,
            destination,
            distance_meters,
            duration_secs: timing.duration_secs,
            duration_with_breaks_secs: timing.duration_with_breaks_secs,
            breaks: segmentation.breaks,
            departure_time: timing.departure_time,
            arrival_time: timing.arrival_time,
            geometry: Some(RouteGeometry::new(vec![origin, destination])),
            error_message: None,
        }
    }
}
