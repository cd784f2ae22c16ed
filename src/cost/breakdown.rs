//! Decomposed cost output.

use serde::{Deserialize, Serialize};

use crate::models::Route;

use super::rates::CostRates;

/// Each component's percentage share of the total, to 1 decimal.
///
/// All zero when the total itself is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostShares {
    /// Fuel share of total, percent.
    pub fuel: f64,
    /// Labor share of total, percent.
    pub labor: f64,
    /// Maintenance share of total, percent.
    pub maintenance: f64,
    /// Fixed-cost share of total, percent.
    pub fixed: f64,
    /// Carbon share of total, percent.
    pub carbon: f64,
}

/// Total logistics cost decomposed into five components.
///
/// Monetary figures are rounded to 2 decimals; shares to 1 decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Fuel cost across all routes.
    pub fuel: f64,
    /// Driver labor cost across all routes.
    pub labor: f64,
    /// Maintenance cost across all routes.
    pub maintenance: f64,
    /// Fixed cost, one charge per dispatched route.
    pub fixed: f64,
    /// Carbon cost across all routes.
    pub carbon: f64,
    /// Grand total.
    pub total: f64,
    /// Percentage share of each component.
    pub shares: CostShares,
}

impl CostRates {
    /// Costs the given routes and aggregates the breakdown.
    ///
    /// Per route: fuel and maintenance scale with distance, labor with
    /// time, carbon with distance through the emission factor and
    /// carbon price, and the fixed charge applies once per route
    /// regardless of distance. An empty route list yields an all-zero
    /// breakdown.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleet_routing::cost::CostRates;
    /// use fleet_routing::models::Route;
    ///
    /// let route = Route {
    ///     vehicle_id: 0,
    ///     stops: vec![0, 1, 0],
    ///     distance: 100.0,
    ///     time: 2.5,
    ///     load: 40,
    ///     load_utilization: 40.0,
    ///     carbon_kg: None,
    /// };
    /// let costs = CostRates::default().breakdown(&[route]);
    /// assert_eq!(costs.fuel, 50.0);
    /// assert_eq!(costs.labor, 37.5);
    /// assert_eq!(costs.total, 135.9);
    /// ```
    pub fn breakdown(&self, routes: &[Route]) -> CostBreakdown {
        let mut fuel = 0.0;
        let mut labor = 0.0;
        let mut maintenance = 0.0;
        let mut fixed = 0.0;
        let mut carbon = 0.0;

        for route in routes {
            fuel += route.distance * self.fuel_per_km;
            labor += route.time * self.wage_per_hour;
            maintenance += route.distance * self.maintenance_per_km;
            fixed += self.fixed_per_route;
            carbon += route.distance * self.co2_per_km * self.carbon_price_per_kg;
        }

        let total = fuel + labor + maintenance + fixed + carbon;
        let share = |component: f64| {
            if total > 0.0 {
                round1(component / total * 100.0)
            } else {
                0.0
            }
        };

        CostBreakdown {
            fuel: round2(fuel),
            labor: round2(labor),
            maintenance: round2(maintenance),
            fixed: round2(fixed),
            carbon: round2(carbon),
            total: round2(total),
            shares: CostShares {
                fuel: share(fuel),
                labor: share(labor),
                maintenance: share(maintenance),
                fixed: share(fixed),
                carbon: share(carbon),
            },
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
