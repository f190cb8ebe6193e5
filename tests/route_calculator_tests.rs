//! End-to-end route calculation tests.
//!
//! Covers the full calculator contract: speed-limit resolution, distance
//! computation, break insertion for short/medium/long trips, and the
//! departure/arrival time bookkeeping.

mod fixtures;

use truck_route_planner::calculator::{CalculatorError, TruckRouteCalculator};
use truck_route_planner::route::{BreakKind, Coordinate, Route, RouteStatus, VehicleProfile};

use fixtures::{BARCELONA, BERLIN, MADRID, TOLEDO, ZARAGOZA};

/// 2025-06-05 08:00:00 UTC.
const DEPARTURE: i64 = 1_749_110_400;

fn calculate(destination: Coordinate) -> Route {
    TruckRouteCalculator::new()
        .calculate_route(
            MADRID.coordinate(),
            destination,
            &VehicleProfile::default(),
            DEPARTURE,
        )
        .expect("valid inputs")
}

// ============================================================================
// Speed limits
// ============================================================================

#[test]
fn test_speed_limit_by_country_and_road_type() {
    let calculator = TruckRouteCalculator::new();

    assert_eq!(calculator.speed_limit("motorway", "ES"), 90.0);
    assert_eq!(calculator.speed_limit("residential", "DE"), 50.0);
}

#[test]
fn test_speed_limit_fallbacks() {
    let calculator = TruckRouteCalculator::new();

    // Unknown country falls back to the default table.
    assert_eq!(calculator.speed_limit("motorway", "XX"), 90.0);

    // Unknown road type falls back to the generic default.
    assert_eq!(calculator.speed_limit("unknown_road_type", "ES"), 50.0);
}

// ============================================================================
// Break scheduling over real trips
// ============================================================================

#[test]
fn test_short_route_needs_no_breaks() {
    // Madrid-Toledo is ~70 km.
    let route = calculate(TOLEDO.coordinate());

    assert!(route.is_success());
    assert!(
        route.breaks.is_empty(),
        "short route should need no breaks, got {}",
        route.breaks.len()
    );
}

#[test]
fn test_route_under_continuous_limit_needs_no_breaks() {
    // Madrid-Zaragoza is ~273 km, about three hours of driving: longer
    // than a local hop but still inside the 4.5 h continuous limit.
    let route = calculate(ZARAGOZA.coordinate());

    assert!(route.is_success());
    assert!(route.breaks.is_empty());
    assert!(route.duration_secs < 4.5 * 3600.0);
}

#[test]
fn test_medium_route_needs_a_regular_break() {
    // Madrid-Barcelona is ~505 km, beyond 4.5 h of continuous driving.
    let calculator = TruckRouteCalculator::new();
    let route = calculate(BARCELONA.coordinate());

    assert_eq!(route.status, RouteStatus::Success);
    assert!(!route.breaks.is_empty(), "expected at least one break");
    assert_eq!(route.breaks[0].kind, BreakKind::RegularBreak);
    assert_eq!(
        route.breaks[0].duration_secs,
        calculator.driving_rules().required_break_secs
    );
}

#[test]
fn test_long_route_needs_daily_rests() {
    // Madrid-Berlin, well beyond a day of driving.
    let route = calculate(BERLIN.coordinate());

    assert_eq!(route.status, RouteStatus::Success);

    let daily_rests = route
        .breaks
        .iter()
        .filter(|b| b.kind == BreakKind::DailyRest)
        .count();
    let regular_breaks = route
        .breaks
        .iter()
        .filter(|b| b.kind == BreakKind::RegularBreak)
        .count();

    assert!(daily_rests >= 1, "expected a daily rest, got {:?}", route.breaks);
    assert!(
        regular_breaks >= 2,
        "expected multiple regular breaks, got {}",
        regular_breaks
    );
}

#[test]
fn test_breaks_come_in_timeline_order() {
    let route = calculate(BERLIN.coordinate());
    for pair in route.breaks.windows(2) {
        assert!(pair[0].start_time < pair[1].start_time);
    }
    if let Some(first) = route.breaks.first() {
        assert!(first.start_time > route.departure_time);
    }
    if let Some(last) = route.breaks.last() {
        assert!(last.start_time < route.arrival_time);
    }
}

// ============================================================================
// Time accounting
// ============================================================================

#[test]
fn test_departure_and_arrival_times() {
    let route = calculate(BARCELONA.coordinate());

    assert_eq!(route.departure_time, DEPARTURE);
    assert!(route.arrival_time > route.departure_time);

    assert!(
        route.duration_with_breaks_secs > route.duration_secs,
        "a route with breaks must take longer on the wall clock"
    );

    let elapsed = (route.arrival_time - route.departure_time) as f64;
    assert!(
        (elapsed - route.duration_with_breaks_secs).abs() <= 1.0,
        "arrival - departure was {} s but duration with breaks is {} s",
        elapsed,
        route.duration_with_breaks_secs
    );
}

#[test]
fn test_durations_are_additive() {
    let route = calculate(BERLIN.coordinate());
    let stop_total: f64 = route.breaks.iter().map(|b| b.duration_secs).sum();
    assert!(
        (route.duration_with_breaks_secs - route.duration_secs - stop_total).abs() < 1e-6
    );
}

#[test]
fn test_distance_in_expected_range() {
    let route = calculate(BARCELONA.coordinate());
    assert!(
        (500_000.0..=510_000.0).contains(&route.distance_meters),
        "Madrid-Barcelona should be 500-510 km, got {} km",
        route.distance_meters / 1000.0
    );
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_rejects_malformed_coordinates() {
    let calculator = TruckRouteCalculator::new();
    let result = calculator.calculate_route(
        Coordinate::new(40.4168, -181.0),
        BARCELONA.coordinate(),
        &VehicleProfile::default(),
        DEPARTURE,
    );
    assert!(matches!(result, Err(CalculatorError::InvalidCoordinate(_))));
}

#[test]
fn test_rejects_non_positive_vehicle_dimensions() {
    let calculator = TruckRouteCalculator::new();
    let mut vehicle = VehicleProfile::default();
    vehicle.weight = -40.0;
    let result = calculator.calculate_route(
        MADRID.coordinate(),
        BARCELONA.coordinate(),
        &vehicle,
        DEPARTURE,
    );
    assert!(matches!(result, Err(CalculatorError::InvalidVehicle(_))));
}
