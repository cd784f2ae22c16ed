//! Routing strategy tags and dispatch.
//!
//! Known limitation: `time_optimized` and `balanced` are accepted tags
//! but alias `cost_optimized` — all three dispatch to the same
//! nearest-feasible assembly. `green` runs that same assembly and then
//! annotates each route with its estimated CO2 emission, leaving the
//! route structure untouched.

use serde::{Deserialize, Serialize};

use crate::assembly::{assemble, Assembly};
use crate::cost::CO2_KG_PER_KM;
use crate::distance::DistanceGraph;
use crate::models::Vehicle;

/// The assembly objective requested by the caller.
///
/// Parsing is lenient: an unrecognized tag falls back to
/// [`Strategy::CostOptimized`] rather than failing the request.
///
/// # Examples
///
/// ```
/// use fleet_routing::strategy::Strategy;
///
/// assert_eq!(Strategy::from_tag("green"), Strategy::Green);
/// assert_eq!(Strategy::from_tag("super_fast"), Strategy::CostOptimized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum Strategy {
    /// Minimize travel cost (the default, and the only real objective).
    #[default]
    CostOptimized,
    /// Alias of `cost_optimized`.
    TimeOptimized,
    /// Alias of `cost_optimized`.
    Balanced,
    /// `cost_optimized` plus a per-route carbon estimate.
    Green,
}

impl Strategy {
    /// Parses a strategy tag, defaulting to `cost_optimized`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "time_optimized" => Self::TimeOptimized,
            "balanced" => Self::Balanced,
            "green" => Self::Green,
            _ => Self::CostOptimized,
        }
    }

    /// The canonical tag for this strategy.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::CostOptimized => "cost_optimized",
            Self::TimeOptimized => "time_optimized",
            Self::Balanced => "balanced",
            Self::Green => "green",
        }
    }
}

impl From<String> for Strategy {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// Runs route assembly under the given strategy.
///
/// Every strategy currently shares the nearest-feasible greedy
/// assembly; `green` additionally sets `carbon_kg` on each route.
pub fn dispatch(
    strategy: Strategy,
    graph: &DistanceGraph,
    vehicles: &[Vehicle],
    demands: &[u32],
) -> Assembly {
    let mut result = assemble(graph, vehicles, demands);
    if strategy == Strategy::Green {
        for route in &mut result.routes {
            route.carbon_kg = Some(route.distance * CO2_KG_PER_KM);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{FreeFlow, SeededTraffic};
    use crate::models::Location;

    fn sample() -> (DistanceGraph, Vec<Vehicle>, Vec<u32>) {
        let depot = Location::depot(0.0, 0.0);
        let deliveries = vec![
            Location::delivery(1, 0.0, 1.0),
            Location::delivery(2, 0.0, 2.0),
            Location::delivery(3, 1.0, 1.0),
        ];
        let graph = DistanceGraph::build(&depot, &deliveries, &SeededTraffic::new(4))
            .expect("valid input");
        let vehicles = vec![Vehicle::new(0, 25), Vehicle::new(1, 25)];
        (graph, vehicles, vec![10, 10, 10])
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Strategy::from_tag("cost_optimized"), Strategy::CostOptimized);
        assert_eq!(Strategy::from_tag("time_optimized"), Strategy::TimeOptimized);
        assert_eq!(Strategy::from_tag("balanced"), Strategy::Balanced);
        assert_eq!(Strategy::from_tag("green"), Strategy::Green);
    }

    #[test]
    fn test_unknown_tag_defaults() {
        assert_eq!(Strategy::from_tag(""), Strategy::CostOptimized);
        assert_eq!(Strategy::from_tag("GREEN"), Strategy::CostOptimized);
        assert_eq!(Strategy::from_tag("fastest"), Strategy::CostOptimized);
    }

    #[test]
    fn test_tag_round_trip() {
        for s in [
            Strategy::CostOptimized,
            Strategy::TimeOptimized,
            Strategy::Balanced,
            Strategy::Green,
        ] {
            assert_eq!(Strategy::from_tag(s.as_tag()), s);
        }
    }

    #[test]
    fn test_aliases_share_routes() {
        let (graph, vehicles, demands) = sample();
        let cost = dispatch(Strategy::CostOptimized, &graph, &vehicles, &demands);
        let time = dispatch(Strategy::TimeOptimized, &graph, &vehicles, &demands);
        let balanced = dispatch(Strategy::Balanced, &graph, &vehicles, &demands);
        assert_eq!(cost, time);
        assert_eq!(cost, balanced);
    }

    #[test]
    fn test_green_annotates_carbon_only() {
        let (graph, vehicles, demands) = sample();
        let cost = dispatch(Strategy::CostOptimized, &graph, &vehicles, &demands);
        let green = dispatch(Strategy::Green, &graph, &vehicles, &demands);

        assert_eq!(cost.routes.len(), green.routes.len());
        assert_eq!(cost.unassigned, green.unassigned);
        for (c, g) in cost.routes.iter().zip(&green.routes) {
            assert_eq!(c.stops, g.stops);
            assert_eq!(c.distance, g.distance);
            assert!(c.carbon_kg.is_none());
            let carbon = g.carbon_kg.expect("green sets carbon");
            assert!((carbon - g.distance * 2.68).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dispatch_on_free_flow() {
        let depot = Location::depot(0.0, 0.0);
        let deliveries = vec![Location::delivery(1, 0.0, 1.0)];
        let graph = DistanceGraph::build(&depot, &deliveries, &FreeFlow).expect("valid input");
        let result = dispatch(
            Strategy::Green,
            &graph,
            &[Vehicle::new(0, 50)],
            &[20],
        );
        assert_eq!(result.routes.len(), 1);
        assert!(result.routes[0].carbon_kg.is_some());
    }
}
