//! Real European locations for realistic test fixtures.
//!
//! City coordinates sourced from OpenStreetMap. Rest areas are plausible
//! service stops along the AP-2/A-2 Madrid-Barcelona corridor, tagged with
//! their approximate along-route position.

use truck_route_planner::route::{Coordinate, RestArea};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Cities
// ============================================================================

pub const MADRID: Location = Location::new("Madrid", 40.4168, -3.7038);
pub const TOLEDO: Location = Location::new("Toledo", 39.8628, -4.0273);
pub const BARCELONA: Location = Location::new("Barcelona", 41.3851, 2.1734);
pub const BERLIN: Location = Location::new("Berlin", 52.5200, 13.4050);
pub const ZARAGOZA: Location = Location::new("Zaragoza", 41.6488, -0.8891);

// ============================================================================
// Rest stops along the Madrid-Barcelona corridor
// ============================================================================

/// Service stops with approximate along-route distance in meters from
/// Madrid, covering the whole corridor at uneven spacing.
pub fn madrid_barcelona_rest_areas() -> Vec<RestArea> {
    vec![
        rest_area("area-guadalajara", "Área de Guadalajara", 40.6333, -3.1669, 55_000.0),
        rest_area("area-medinaceli", "Área de Medinaceli", 41.1717, -2.4333, 150_000.0),
        rest_area("area-calatayud", "Área de Calatayud", 41.3535, -1.6433, 230_000.0),
        rest_area("area-zaragoza", "Área de Zaragoza", 41.6488, -0.8891, 310_000.0),
        rest_area("area-pina-de-ebro", "Área de Pina de Ebro", 41.4900, -0.5300, 350_000.0),
        rest_area("area-fraga", "Área de Fraga", 41.5220, 0.3500, 420_000.0),
        rest_area("area-lleida", "Área de Lleida", 41.6176, 0.6200, 445_000.0),
        rest_area("area-cervera", "Área de Cervera", 41.6700, 1.2700, 480_000.0),
    ]
}

fn rest_area(id: &str, name: &str, lat: f64, lng: f64, along_m: f64) -> RestArea {
    RestArea {
        id: id.to_string(),
        name: name.to_string(),
        location: Coordinate::new(lat, lng),
        distance_along_route_m: along_m,
    }
}
