//! Capacity-bounded route assembly.
//!
//! Vehicles draw from one shared pool of unassigned deliveries, in
//! fleet order; the pool dependency makes assembly sequential by
//! design. Deliveries left over when the fleet is exhausted are
//! reported, never dropped.

mod greedy;

use serde::{Deserialize, Serialize};

use crate::models::Route;

pub use greedy::assemble;

/// Why a delivery ended up without a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignedReason {
    /// The demand exceeds every vehicle's capacity; more vehicles of
    /// the same types can never resolve this.
    ExceedsFleetCapacity,
    /// The demand fits some vehicle, but the fleet ran out.
    FleetExhausted,
}

/// A delivery that no route serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unassigned {
    /// Delivery node index.
    pub node: usize,
    /// Resolved demand of the delivery.
    pub demand: u32,
    /// Why it was left out.
    pub reason: UnassignedReason,
}

/// Output of route assembly: the built routes plus the leftover report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assembly {
    /// One route per vehicle that actually left the depot, fleet order.
    pub routes: Vec<Route>,
    /// Deliveries no route serves, ascending node order.
    pub unassigned: Vec<Unassigned>,
}
