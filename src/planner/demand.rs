//! Demand estimation collaborator boundary.

use chrono::NaiveDate;

use crate::models::Location;

/// Minimum demand the planner accepts from an estimator.
pub const MIN_ESTIMATED_DEMAND: u32 = 10;

/// External demand estimator, consulted for deliveries whose demand is
/// absent or zero.
///
/// The estimation formula is outside this crate; implementations are
/// expected to return at least [`MIN_ESTIMATED_DEMAND`] units, and the
/// planner clamps to that floor regardless.
pub trait DemandEstimator {
    /// Estimated demand for a delivery, optionally for a specific date.
    fn estimate(&self, location: &Location, date: Option<NaiveDate>) -> u32;
}

/// Estimator that returns the same figure for every delivery.
///
/// Intended for tests and offline what-if runs.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::planner::{DemandEstimator, FixedDemand};
///
/// let estimator = FixedDemand(35);
/// let stop = Location::delivery(1, 0.0, 0.0);
/// assert_eq!(estimator.estimate(&stop, None), 35);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedDemand(pub u32);

impl DemandEstimator for FixedDemand {
    fn estimate(&self, _location: &Location, _date: Option<NaiveDate>) -> u32 {
        self.0.max(MIN_ESTIMATED_DEMAND)
    }
}
