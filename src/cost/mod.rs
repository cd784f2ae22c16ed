//! Logistics cost decomposition.
//!
//! Converts route aggregates (distance, time, route count) into a
//! five-component cost breakdown: fuel, labor, maintenance, fixed, and
//! carbon.

mod breakdown;
mod rates;

pub use breakdown::{CostBreakdown, CostShares};
pub use rates::{CostRates, CO2_KG_PER_KM};
