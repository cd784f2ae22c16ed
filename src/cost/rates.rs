//! Cost rate configuration.

use serde::{Deserialize, Serialize};

/// Average CO2 emission per km driven, in kg.
pub const CO2_KG_PER_KM: f64 = 2.68;

/// Rate table the cost model applies to route aggregates.
///
/// Every figure can be overridden; [`CostRates::default`] carries the
/// standard table.
///
/// # Examples
///
/// ```
/// use fleet_routing::cost::CostRates;
///
/// let rates = CostRates {
///     fuel_per_km: 0.62,
///     ..CostRates::default()
/// };
/// assert_eq!(rates.wage_per_hour, 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRates {
    /// Fuel cost per km driven.
    pub fuel_per_km: f64,
    /// Driver wage per hour on the road.
    pub wage_per_hour: f64,
    /// Maintenance cost per km driven.
    pub maintenance_per_km: f64,
    /// Fixed cost charged once per dispatched route.
    pub fixed_per_route: f64,
    /// CO2 emitted per km, in kg.
    pub co2_per_km: f64,
    /// Carbon price per kg of CO2.
    pub carbon_price_per_kg: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_per_km: 0.50,
            wage_per_hour: 15.0,
            maintenance_per_km: 0.15,
            fixed_per_route: 20.0,
            co2_per_km: CO2_KG_PER_KM,
            carbon_price_per_kg: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let rates = CostRates::default();
        assert_eq!(rates.fuel_per_km, 0.50);
        assert_eq!(rates.wage_per_hour, 15.0);
        assert_eq!(rates.maintenance_per_km, 0.15);
        assert_eq!(rates.fixed_per_route, 20.0);
        assert_eq!(rates.co2_per_km, 2.68);
        assert_eq!(rates.carbon_price_per_kg, 0.05);
    }
}
