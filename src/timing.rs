//! Trip time bookkeeping.
//!
//! Derives departure/arrival instants and the two duration figures every
//! route carries: pure driving time and wall-clock elapsed time including
//! stops.

use crate::route::ScheduledBreak;
use crate::schedule::Segmentation;

/// Derived trip times. Invariants:
/// `duration_with_breaks_secs == duration_secs + sum of stop durations` and
/// `arrival_time == departure_time + duration_with_breaks_secs`, the latter
/// rounded to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripTiming {
    pub departure_time: i64,
    pub arrival_time: i64,
    pub duration_secs: f64,
    pub duration_with_breaks_secs: f64,
}

impl TripTiming {
    pub fn derive(departure_time: i64, base_duration_secs: f64, breaks: &[ScheduledBreak]) -> Self {
        let stop_total: f64 = breaks.iter().map(|b| b.duration_secs).sum();
        let duration_with_breaks_secs = base_duration_secs + stop_total;

        Self {
            departure_time,
            arrival_time: departure_time + duration_with_breaks_secs.round() as i64,
            duration_secs: base_duration_secs,
            duration_with_breaks_secs,
        }
    }

    pub fn from_segmentation(departure_time: i64, segmentation: &Segmentation) -> Self {
        Self::derive(
            departure_time,
            segmentation.base_duration_secs,
            &segmentation.breaks,
        )
    }
}
