//! Delivery and depot locations.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The role a location plays in a routing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The single depot every route starts and ends at.
    Depot,
    /// A delivery stop with a demand to fulfil.
    #[default]
    Delivery,
}

/// A geographic location in a routing request.
///
/// Node 0 is conventionally the depot; deliveries are numbered 1..=N in
/// request order. A delivery's demand may be unset (or zero) until the
/// demand estimator resolves it; the depot carries no demand.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Location, Role};
///
/// let depot = Location::depot(52.52, 13.405);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.role(), Role::Depot);
/// assert!(depot.demand().is_none());
///
/// let stop = Location::delivery(1, 52.50, 13.42).with_demand(30);
/// assert_eq!(stop.id(), 1);
/// assert_eq!(stop.demand(), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    id: usize,
    lat: f64,
    lng: f64,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    demand: Option<u32>,
}

impl Location {
    /// Creates the depot at the given coordinates (id 0, no demand).
    pub fn depot(lat: f64, lng: f64) -> Self {
        Self {
            id: 0,
            lat,
            lng,
            role: Role::Depot,
            demand: None,
        }
    }

    /// Creates a delivery location with an unresolved demand.
    pub fn delivery(id: usize, lat: f64, lng: f64) -> Self {
        Self {
            id,
            lat,
            lng,
            role: Role::Delivery,
            demand: None,
        }
    }

    /// Sets the known demand for this delivery.
    pub fn with_demand(mut self, demand: u32) -> Self {
        self.demand = Some(demand);
        self
    }

    /// Node index (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Role of this location.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Demand in load units, if already known.
    pub fn demand(&self) -> Option<u32> {
        self.demand
    }

    /// Checks that both coordinates are finite and within range.
    ///
    /// A missing or malformed coordinate is a hard error; the planner
    /// never substitutes a default position.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.lat.is_finite() || self.lat.abs() > 90.0 {
            return Err(ValidationError::InvalidLatitude {
                id: self.id,
                lat: self.lat,
            });
        }
        if !self.lng.is_finite() || self.lng.abs() > 180.0 {
            return Err(ValidationError::InvalidLongitude {
                id: self.id,
                lng: self.lng,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot() {
        let d = Location::depot(10.0, 20.0);
        assert_eq!(d.id(), 0);
        assert_eq!(d.role(), Role::Depot);
        assert_eq!(d.lat(), 10.0);
        assert_eq!(d.lng(), 20.0);
        assert!(d.demand().is_none());
    }

    #[test]
    fn test_delivery_with_demand() {
        let l = Location::delivery(3, 1.0, 2.0).with_demand(42);
        assert_eq!(l.id(), 3);
        assert_eq!(l.role(), Role::Delivery);
        assert_eq!(l.demand(), Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(Location::depot(90.0, -180.0).validate().is_ok());
        assert!(Location::delivery(1, -90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_latitude() {
        let err = Location::delivery(2, 90.5, 0.0).validate();
        assert_eq!(
            err,
            Err(ValidationError::InvalidLatitude { id: 2, lat: 90.5 })
        );
        assert!(Location::delivery(2, f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_longitude() {
        let err = Location::delivery(1, 0.0, -180.25).validate();
        assert_eq!(
            err,
            Err(ValidationError::InvalidLongitude { id: 1, lng: -180.25 })
        );
        assert!(Location::delivery(1, 0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let l: Location =
            serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5}"#).expect("valid document");
        assert_eq!(l.id(), 0);
        assert_eq!(l.role(), Role::Delivery);
        assert!(l.demand().is_none());
    }
}
