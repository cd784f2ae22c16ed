//! Distance and travel time graph construction.
//!
//! Edge distances are great-circle distances inflated by a per-pair
//! traffic multiplier; edge times derive from a fixed average speed.

mod graph;
mod haversine;
mod traffic;

pub use graph::{DistanceGraph, Edge, AVG_SPEED_KMH};
pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use traffic::{FreeFlow, SeededTraffic, TrafficModel};
