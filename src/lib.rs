//! # fleet-routing
//!
//! Delivery fleet routing library: builds a traffic-weighted distance
//! graph over a depot and its deliveries, ranks location pairs with the
//! Clarke-Wright savings score, assembles capacity-bounded vehicle
//! routes greedily, and decomposes the resulting logistics cost into
//! fuel, labor, maintenance, fixed, and carbon components.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Vehicle, Route, validation errors)
//! - [`distance`] — Haversine distance graph with an injectable traffic model
//! - [`savings`] — Ranked pairwise savings scores (Clarke & Wright, 1964)
//! - [`assembly`] — Greedy capacity-bounded route assembly
//! - [`cost`] — Cost rates and the decomposed cost breakdown
//! - [`strategy`] — Routing strategy tags and dispatch
//! - [`planner`] — Request validation, demand resolution, and plan orchestration

pub mod assembly;
pub mod cost;
pub mod distance;
pub mod models;
pub mod planner;
pub mod savings;
pub mod strategy;
