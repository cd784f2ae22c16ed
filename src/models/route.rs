//! Assembled vehicle routes.

use serde::{Deserialize, Serialize};

/// An assembled route for a single vehicle.
///
/// `stops` holds node indices in visit order, beginning and ending at
/// the depot (node 0) for every route that left it. Routes are
/// immutable outputs; the assembler fills every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Vehicle this route is assigned to.
    pub vehicle_id: usize,
    /// Node indices in visit order, depot-bookended.
    pub stops: Vec<usize>,
    /// Cumulative travel distance in km.
    pub distance: f64,
    /// Cumulative travel time in hours.
    pub time: f64,
    /// Cumulative load in demand units.
    pub load: u32,
    /// Load as a percentage of the vehicle's capacity.
    pub load_utilization: f64,
    /// Estimated CO2 emission in kg, set by the `green` strategy.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub carbon_kg: Option<f64>,
}

impl Route {
    /// Number of deliveries served, excluding the two depot bookends.
    pub fn deliveries(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliveries_excludes_bookends() {
        let route = Route {
            vehicle_id: 0,
            stops: vec![0, 2, 1, 0],
            distance: 12.0,
            time: 0.3,
            load: 40,
            load_utilization: 40.0,
            carbon_kg: None,
        };
        assert_eq!(route.deliveries(), 2);
    }

    #[test]
    fn test_carbon_omitted_from_output() {
        let route = Route {
            vehicle_id: 0,
            stops: vec![0, 1, 0],
            distance: 5.0,
            time: 0.125,
            load: 10,
            load_utilization: 10.0,
            carbon_kg: None,
        };
        let doc = serde_json::to_string(&route).expect("serializable");
        assert!(!doc.contains("carbon_kg"));
    }
}
