//! Vehicle type with load capacity.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A capacity-limited vehicle available for route assignment.
///
/// Capacity is expressed in the same load units as delivery demand.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 200);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    id: usize,
    capacity: u32,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: u32) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Checks that the capacity is strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::NonPositiveCapacity { id: self.id });
        }
        Ok(())
    }
}
