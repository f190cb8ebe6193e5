//! truck-route-planner core
//!
//! Computes legally-compliant driving schedules for trucks: base trip
//! timing from distance and speed limits, mandated breaks and daily rests
//! inserted over a simulated driving timeline, and optional binding of each
//! scheduled stop to a real-world rest area.

pub mod traits;
pub mod route;
pub mod haversine;
pub mod geometry;
pub mod speed;
pub mod schedule;
pub mod timing;
pub mod optimizer;
pub mod calculator;
pub mod overpass;
