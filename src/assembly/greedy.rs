//! Nearest-feasible greedy route construction.
//!
//! # Algorithm
//!
//! For each vehicle in fleet order, start at the depot and repeatedly
//! move to the closest unassigned delivery whose demand still fits the
//! remaining capacity. When no candidate fits, close the route back to
//! the depot. Nothing is ever force-inserted, so a route's load never
//! exceeds its vehicle's capacity.
//!
//! # Complexity
//!
//! O(v · n²) for v vehicles and n deliveries.

use crate::distance::DistanceGraph;
use crate::models::{Route, Vehicle};

use super::{Assembly, Unassigned, UnassignedReason};

/// Assembles capacity-bounded routes over the graph's delivery nodes.
///
/// `demands[k]` is the resolved demand of delivery node `k + 1`; it
/// must cover every delivery node of the graph. Each vehicle gets at
/// most one route, and a route that never leaves the depot is
/// discarded. An absent edge is treated as unreachable: such a
/// candidate is skipped, and a route whose return edge is missing stays
/// open at its last stop.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Location, Vehicle};
/// use fleet_routing::distance::{DistanceGraph, FreeFlow};
/// use fleet_routing::assembly::assemble;
///
/// let depot = Location::depot(0.0, 0.0);
/// let deliveries = vec![
///     Location::delivery(1, 0.0, 1.0),
///     Location::delivery(2, 0.0, 2.0),
/// ];
/// let graph = DistanceGraph::build(&depot, &deliveries, &FreeFlow).unwrap();
///
/// let result = assemble(&graph, &[Vehicle::new(0, 100)], &[40, 40]);
/// assert_eq!(result.routes.len(), 1);
/// assert_eq!(result.routes[0].stops, vec![0, 1, 2, 0]);
/// assert_eq!(result.routes[0].load, 80);
/// ```
pub fn assemble(graph: &DistanceGraph, vehicles: &[Vehicle], demands: &[u32]) -> Assembly {
    let n = graph.deliveries();
    debug_assert_eq!(demands.len(), n, "one demand per delivery node");

    let mut assigned = vec![false; n + 1];
    let mut remaining = n;
    let mut result = Assembly::default();

    for vehicle in vehicles {
        if remaining == 0 {
            break;
        }

        let mut stops = vec![0usize];
        let mut distance = 0.0;
        let mut time = 0.0;
        let mut load: u32 = 0;
        let mut current = 0usize;

        loop {
            // Closest unassigned delivery that still fits; scanning in
            // ascending node order makes ties land on the lowest index.
            let mut best: Option<(usize, f64, f64)> = None;
            for node in 1..=n {
                if assigned[node] {
                    continue;
                }
                if load + demands[node - 1] > vehicle.capacity() {
                    continue;
                }
                let Some(edge) = graph.get(current, node) else {
                    continue;
                };
                if best.map_or(true, |(_, d, _)| edge.distance < d) {
                    best = Some((node, edge.distance, edge.time));
                }
            }

            let Some((node, d, t)) = best else {
                break;
            };
            stops.push(node);
            distance += d;
            time += t;
            load += demands[node - 1];
            assigned[node] = true;
            remaining -= 1;
            current = node;
        }

        if current == 0 {
            // Never left the depot; vehicle stays idle.
            continue;
        }

        if let Some(back) = graph.get(current, 0) {
            stops.push(0);
            distance += back.distance;
            time += back.time;
        }

        result.routes.push(Route {
            vehicle_id: vehicle.id(),
            stops,
            distance,
            time,
            load,
            load_utilization: f64::from(load) / f64::from(vehicle.capacity()) * 100.0,
            carbon_kg: None,
        });
    }

    let fleet_max = vehicles.iter().map(Vehicle::capacity).max();
    for node in 1..=n {
        if assigned[node] {
            continue;
        }
        let demand = demands[node - 1];
        let reason = match fleet_max {
            Some(max) if demand > max => UnassignedReason::ExceedsFleetCapacity,
            _ => UnassignedReason::FleetExhausted,
        };
        result.unassigned.push(Unassigned {
            node,
            demand,
            reason,
        });
    }

    result
}
