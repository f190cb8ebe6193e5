//! Overpass API adapter for rest-area discovery.
//!
//! Queries OpenStreetMap rest areas and service stations around sampled
//! points of the route corridor. Transport failures degrade to an empty
//! candidate list; a route stays valid with unassigned breaks.

use std::collections::HashMap;

use serde::Deserialize;

use crate::geometry::RouteGeometry;
use crate::route::{Coordinate, RestArea, Route};
use crate::traits::RestAreaProvider;

#[derive(Debug, Clone)]
pub struct OverpassConfig {
    pub base_url: String,
    /// Search radius around each sampled corridor point, meters.
    pub search_radius_m: f64,
    /// Spacing of sampled corridor points, meters.
    pub sample_spacing_m: f64,
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: "https://overpass-api.de/api/interpreter".to_string(),
            search_radius_m: 2_000.0,
            sample_spacing_m: 50_000.0,
            timeout_secs: 25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverpassClient {
    config: OverpassConfig,
    client: reqwest::blocking::Client,
}

impl OverpassClient {
    pub fn new(config: OverpassConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RestAreaProvider for OverpassClient {
    fn rest_areas_for(&self, route: &Route) -> Vec<RestArea> {
        let geometry = match &route.geometry {
            Some(geometry) => geometry.clone(),
            None => RouteGeometry::new(vec![route.origin, route.destination]),
        };

        let samples = sample_corridor(&geometry, self.config.sample_spacing_m);
        if samples.is_empty() {
            return Vec::new();
        }

        let query = build_query(&samples, self.config.search_radius_m, self.config.timeout_secs);

        let response = self
            .client
            .post(&self.config.base_url)
            .body(query)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OverpassResponse>());

        match response {
            Ok(body) => project_candidates(body, &geometry),
            Err(err) => {
                tracing::warn!(error = %err, "rest-area discovery failed, continuing without candidates");
                Vec::new()
            }
        }
    }
}

/// Sample the route corridor at a fixed spacing, always including both ends.
fn sample_corridor(geometry: &RouteGeometry, spacing_m: f64) -> Vec<Coordinate> {
    let length = geometry.length_meters();
    if length <= 0.0 || spacing_m <= 0.0 {
        return geometry.points().first().copied().into_iter().collect();
    }

    let mut samples = Vec::new();
    let mut along = 0.0;
    while along < length {
        if let Some(point) = geometry.point_at(along) {
            samples.push(point);
        }
        along += spacing_m;
    }
    if let Some(end) = geometry.point_at(length) {
        samples.push(end);
    }
    samples
}

/// Build an Overpass QL query for rest areas and services around the
/// sampled points.
fn build_query(samples: &[Coordinate], radius_m: f64, timeout_secs: u64) -> String {
    let mut query = format!("[out:json][timeout:{}];\n(\n", timeout_secs);
    for point in samples {
        query.push_str(&format!(
            "  node[\"highway\"=\"rest_area\"](around:{:.0},{:.6},{:.6});\n",
            radius_m, point.lat, point.lng
        ));
        query.push_str(&format!(
            "  node[\"highway\"=\"services\"](around:{:.0},{:.6},{:.6});\n",
            radius_m, point.lat, point.lng
        ));
    }
    query.push_str(");\nout;\n");
    query
}

/// Project response elements onto the route, dropping duplicates and
/// ordering by along-route position.
fn project_candidates(body: OverpassResponse, geometry: &RouteGeometry) -> Vec<RestArea> {
    let mut seen = HashMap::new();
    let mut areas = Vec::new();

    for element in body.elements {
        let (lat, lon) = match (element.lat, element.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => continue,
        };
        let id = format!("node/{}", element.id);
        if seen.insert(id.clone(), ()).is_some() {
            continue;
        }

        let location = Coordinate::new(lat, lon);
        let name = element
            .tags
            .as_ref()
            .and_then(|tags| tags.get("name").cloned())
            .unwrap_or_else(|| "Rest area".to_string());

        areas.push(RestArea {
            id,
            name,
            location,
            distance_along_route_m: geometry.locate(location),
        });
    }

    areas.sort_by(|a, b| {
        a.distance_along_route_m
            .total_cmp(&b.distance_along_route_m)
    });
    areas
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    tags: Option<HashMap<String, String>>,
}
