//! Rest-stop optimization: binding scheduled breaks to physical rest areas.
//!
//! Assignment is greedy and independent per break, in route order: each
//! break takes the closest candidate at or after its ideal stopping
//! position, within a bounded search window. No backtracking or global
//! reassignment. Timing is never touched; only location metadata is added.

use crate::route::{RestArea, Route, RouteStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerOptions {
    /// Search window around a break's ideal stopping position, meters.
    pub tolerance_m: f64,
    /// Whether one rest area may serve several breaks.
    pub allow_reuse: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            tolerance_m: 25_000.0,
            allow_reuse: false,
        }
    }
}

/// Assign rest areas to the breaks of `route`, returning a new route.
///
/// Assignments are recomputed from scratch, so reapplying with the same
/// candidate set yields the same result. A break with no candidate in its
/// window stays unassigned; the route status is never downgraded.
pub fn optimize_rest_stops(
    route: &Route,
    rest_areas: &[RestArea],
    options: &OptimizerOptions,
) -> Route {
    let mut optimized = route.clone();
    if route.status != RouteStatus::Success {
        return optimized;
    }

    let mut consumed = vec![false; rest_areas.len()];

    for index in 0..optimized.breaks.len() {
        let ideal = ideal_position_m(route, index);
        let chosen = select_candidate(rest_areas, &consumed, ideal, options.tolerance_m);

        match chosen {
            Some(area_index) => {
                if !options.allow_reuse {
                    consumed[area_index] = true;
                }
                let area = &rest_areas[area_index];
                tracing::debug!(
                    break_index = index,
                    rest_area = %area.id,
                    ideal_m = ideal,
                    at_m = area.distance_along_route_m,
                    "assigned rest area"
                );
                optimized.breaks[index].rest_area = Some(area.clone());
            }
            None => {
                optimized.breaks[index].rest_area = None;
            }
        }
    }

    optimized
}

/// Ideal stopping position of the `index`-th break, in meters from the
/// origin: the fraction of driving time completed at the break, scaled by
/// total route distance.
pub fn ideal_position_m(route: &Route, index: usize) -> f64 {
    if route.duration_secs <= 0.0 {
        return 0.0;
    }

    let prior_stops: f64 = route.breaks[..index]
        .iter()
        .map(|b| b.duration_secs)
        .sum();
    let driving_elapsed =
        (route.breaks[index].start_time - route.departure_time) as f64 - prior_stops;

    (driving_elapsed / route.duration_secs) * route.distance_meters
}

/// Pick the best unconsumed candidate for a break at `ideal` meters.
///
/// Candidates at or after the ideal position win over candidates before it;
/// within each group the smallest offset wins, ties going to the earlier
/// position along the route.
fn select_candidate(
    rest_areas: &[RestArea],
    consumed: &[bool],
    ideal: f64,
    tolerance_m: f64,
) -> Option<usize> {
    let mut best_ahead: Option<(f64, f64, usize)> = None;
    let mut best_behind: Option<(f64, f64, usize)> = None;

    for (index, area) in rest_areas.iter().enumerate() {
        if consumed[index] {
            continue;
        }

        let offset = area.distance_along_route_m - ideal;
        if offset.abs() > tolerance_m {
            continue;
        }

        let key = (offset.abs(), area.distance_along_route_m, index);
        let slot = if offset >= 0.0 {
            &mut best_ahead
        } else {
            &mut best_behind
        };
        let better = match slot {
            Some((best_offset, best_pos, _)) => {
                key.0 < *best_offset || (key.0 == *best_offset && key.1 < *best_pos)
            }
            None => true,
        };
        if better {
            *slot = Some(key);
        }
    }

    best_ahead.or(best_behind).map(|(_, _, index)| index)
}
