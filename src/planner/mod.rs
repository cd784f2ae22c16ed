//! Plan orchestration: validation, demand resolution, graph build,
//! strategy dispatch, assembly, and costing.
//!
//! Each request is planned in isolation; nothing is shared or retained
//! across calls.

mod demand;

use serde::{Deserialize, Serialize};

use crate::assembly::Unassigned;
use crate::cost::{CostBreakdown, CostRates};
use crate::distance::{DistanceGraph, SeededTraffic};
use crate::models::{Location, Route, ValidationError, Vehicle};
use crate::savings::{rank_pairs, SavingsEntry};
use crate::strategy::{dispatch, Strategy};

pub use demand::{DemandEstimator, FixedDemand, MIN_ESTIMATED_DEMAND};

/// A routing request: one depot, its deliveries, the available fleet,
/// and the requested strategy.
///
/// Location ids and roles are assigned by position (depot = node 0,
/// deliveries = 1..=N in order); any ids carried in the document are
/// ignored. `traffic_seed` pins the congestion sampling so identical
/// requests plan identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// The depot every route starts and ends at.
    pub depot: Location,
    /// Deliveries to serve, in request order.
    pub deliveries: Vec<Location>,
    /// Available vehicles, in dispatch order.
    pub vehicles: Vec<Vehicle>,
    /// Assembly objective; missing or unknown tags mean cost-optimized.
    #[serde(default)]
    pub strategy: Strategy,
    /// Seed for the per-edge traffic multiplier.
    #[serde(default)]
    pub traffic_seed: u64,
    /// Date the demand estimator should forecast for, if any.
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
}

/// Aggregate figures over a whole plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of route distances in km.
    pub total_distance: f64,
    /// Sum of route times in hours.
    pub total_time: f64,
    /// Grand total cost.
    pub total_cost: f64,
    /// Number of vehicles that received a route.
    pub vehicles_used: usize,
    /// Deliveries actually served across all routes.
    pub deliveries_completed: usize,
    /// Mean load utilization across used vehicles, percent; 0 when no
    /// vehicle was used.
    pub avg_utilization: f64,
}

/// The complete result of planning one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Assembled routes, fleet order.
    pub routes: Vec<Route>,
    /// Deliveries no route serves, with the reason each was left out.
    pub unassigned: Vec<Unassigned>,
    /// Ranked savings diagnostic for the request's distance graph.
    pub savings: Vec<SavingsEntry>,
    /// Decomposed cost of the assembled routes.
    pub costs: CostBreakdown,
    /// Aggregates over the whole plan.
    pub summary: PlanSummary,
}

/// Plans delivery routes for incoming requests.
///
/// Holds the two pieces of per-deployment configuration: the demand
/// estimator collaborator and the cost rate table.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Location, Vehicle};
/// use fleet_routing::planner::{FixedDemand, Planner, PlanRequest};
/// use fleet_routing::strategy::Strategy;
///
/// let planner = Planner::new(FixedDemand(25));
/// let request = PlanRequest {
///     depot: Location::depot(0.0, 0.0),
///     deliveries: vec![Location::delivery(1, 0.0, 1.0)],
///     vehicles: vec![Vehicle::new(0, 100)],
///     strategy: Strategy::CostOptimized,
///     traffic_seed: 0,
///     date: None,
/// };
/// let plan = planner.plan(&request).unwrap();
/// assert_eq!(plan.routes.len(), 1);
/// assert_eq!(plan.summary.deliveries_completed, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Planner<E> {
    estimator: E,
    rates: CostRates,
}

impl<E: DemandEstimator> Planner<E> {
    /// Creates a planner with the default cost rate table.
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            rates: CostRates::default(),
        }
    }

    /// Overrides the cost rate table.
    pub fn with_rates(mut self, rates: CostRates) -> Self {
        self.rates = rates;
        self
    }

    /// Plans routes for a single request.
    ///
    /// Fails fast on malformed input (coordinates, capacities); every
    /// other degraded condition — unreachable pairs, oversized demands,
    /// an exhausted or empty fleet — is reported inside the returned
    /// plan instead of failing it.
    pub fn plan(&self, request: &PlanRequest) -> Result<RoutePlan, ValidationError> {
        let depot = Location::depot(request.depot.lat(), request.depot.lng());
        depot.validate()?;

        let mut deliveries = Vec::with_capacity(request.deliveries.len());
        for (k, entry) in request.deliveries.iter().enumerate() {
            let mut location = Location::delivery(k + 1, entry.lat(), entry.lng());
            if let Some(known) = entry.demand() {
                location = location.with_demand(known);
            }
            location.validate()?;
            deliveries.push(location);
        }

        for vehicle in &request.vehicles {
            vehicle.validate()?;
        }

        // A demand of zero counts as unknown, same as an absent one.
        let demands: Vec<u32> = deliveries
            .iter()
            .map(|location| match location.demand() {
                Some(known) if known > 0 => known,
                _ => self
                    .estimator
                    .estimate(location, request.date)
                    .max(MIN_ESTIMATED_DEMAND),
            })
            .collect();

        let traffic = SeededTraffic::new(request.traffic_seed);
        let graph = DistanceGraph::build(&depot, &deliveries, &traffic)?;
        log::debug!(
            "distance graph built: {} nodes, strategy {}",
            graph.size(),
            request.strategy.as_tag()
        );

        let savings = rank_pairs(&graph);
        let assembly = dispatch(request.strategy, &graph, &request.vehicles, &demands);
        if !assembly.unassigned.is_empty() {
            log::warn!(
                "{} of {} deliveries left unassigned",
                assembly.unassigned.len(),
                deliveries.len()
            );
        }

        let costs = self.rates.breakdown(&assembly.routes);
        let summary = summarize(&assembly.routes, &costs);

        Ok(RoutePlan {
            routes: assembly.routes,
            unassigned: assembly.unassigned,
            savings,
            costs,
            summary,
        })
    }
}

fn summarize(routes: &[Route], costs: &CostBreakdown) -> PlanSummary {
    let avg_utilization = if routes.is_empty() {
        0.0
    } else {
        routes.iter().map(|r| r.load_utilization).sum::<f64>() / routes.len() as f64
    };

    PlanSummary {
        total_distance: routes.iter().map(|r| r.distance).sum(),
        total_time: routes.iter().map(|r| r.time).sum(),
        total_cost: costs.total,
        vehicles_used: routes.len(),
        deliveries_completed: routes.iter().map(Route::deliveries).sum(),
        avg_utilization,
    }
}
