//! Test fixtures for truck-route-planner.
//!
//! Provides real European city coordinates and motorway rest areas along
//! the Madrid-Barcelona corridor.

pub mod european_locations;

pub use european_locations::*;
