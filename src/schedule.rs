//! Driving-time segmentation: inserting mandated breaks into a trip.
//!
//! Simulates a single continuous driving timeline and emits a stop whenever
//! a regulatory limit is reached. Two counters drive the simulation:
//! continuous driving since the last break, and cumulative driving since the
//! last daily rest. A due daily rest absorbs a regular break falling at the
//! same instant.

use crate::route::{BreakKind, ScheduledBreak};

/// Regulatory driving-time limits and mandated stop durations, in seconds.
///
/// Defaults follow the EU heavy-vehicle regime. Immutable configuration,
/// shared read-only across calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivingRules {
    /// Maximum uninterrupted driving before a regular break is required.
    pub continuous_driving_limit_secs: f64,
    /// Duration of a regular break.
    pub required_break_secs: f64,
    /// Maximum cumulative driving between two daily rests.
    pub daily_driving_limit_secs: f64,
    /// Duration of a daily rest.
    pub daily_rest_secs: f64,
}

impl Default for DrivingRules {
    fn default() -> Self {
        Self {
            // 4 h 30 min driving, then 45 min break.
            continuous_driving_limit_secs: 4.5 * 3600.0,
            required_break_secs: 45.0 * 60.0,
            // 9 h driving per day, then 11 h rest.
            daily_driving_limit_secs: 9.0 * 3600.0,
            daily_rest_secs: 11.0 * 3600.0,
        }
    }
}

/// Result of segmenting a trip: base driving time plus ordered stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub base_duration_secs: f64,
    pub breaks: Vec<ScheduledBreak>,
}

/// Driver activity during the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Driving,
    OnBreak,
    OnDailyRest,
}

/// Segment a trip of `distance_meters` at `average_speed_kmh` into driving
/// stints and mandated stops, starting at `departure_time` (unix seconds).
///
/// Each emitted break records the simulated wall-clock instant it starts,
/// so stop times already account for all earlier stops.
pub fn segment(
    distance_meters: f64,
    average_speed_kmh: f64,
    departure_time: i64,
    rules: &DrivingRules,
) -> Segmentation {
    let speed_ms = average_speed_kmh / 3.6;
    let base_duration_secs = distance_meters / speed_ms;

    let mut breaks = Vec::new();
    let mut remaining = base_duration_secs;
    let mut clock = departure_time as f64;
    let mut continuous = 0.0;
    let mut daily = 0.0;
    let mut state = DriverState::Driving;

    while remaining > 0.0 {
        match state {
            DriverState::Driving => {
                let until_break = rules.continuous_driving_limit_secs - continuous;
                let until_rest = rules.daily_driving_limit_secs - daily;
                let stint = remaining.min(until_break).min(until_rest);

                clock += stint;
                continuous += stint;
                daily += stint;
                remaining -= stint;

                if remaining <= 0.0 {
                    // Final leg; no further stop required.
                    break;
                }

                // Daily rest takes precedence over a break due at the same
                // instant: the break is absorbed into the rest.
                state = if daily >= rules.daily_driving_limit_secs {
                    DriverState::OnDailyRest
                } else {
                    DriverState::OnBreak
                };
            }
            DriverState::OnBreak => {
                tracing::trace!(at = clock as i64, "inserting regular break");
                breaks.push(ScheduledBreak {
                    kind: BreakKind::RegularBreak,
                    start_time: clock.round() as i64,
                    duration_secs: rules.required_break_secs,
                    rest_area: None,
                });
                clock += rules.required_break_secs;
                continuous = 0.0;
                state = DriverState::Driving;
            }
            DriverState::OnDailyRest => {
                tracing::trace!(at = clock as i64, "inserting daily rest");
                breaks.push(ScheduledBreak {
                    kind: BreakKind::DailyRest,
                    start_time: clock.round() as i64,
                    duration_secs: rules.daily_rest_secs,
                    rest_area: None,
                });
                clock += rules.daily_rest_secs;
                continuous = 0.0;
                daily = 0.0;
                state = DriverState::Driving;
            }
        }
    }

    Segmentation {
        base_duration_secs,
        breaks,
    }
}
