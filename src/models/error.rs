//! Validation errors.

use thiserror::Error;

/// An invalid field in a routing request.
///
/// Raised during up-front validation, before the distance graph is
/// built. Invalid input is never silently defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Latitude is non-finite or outside [-90, 90] degrees.
    #[error("location {id}: latitude {lat} is not a valid coordinate")]
    InvalidLatitude {
        /// Node index of the offending location (0 = depot).
        id: usize,
        /// The rejected value.
        lat: f64,
    },
    /// Longitude is non-finite or outside [-180, 180] degrees.
    #[error("location {id}: longitude {lng} is not a valid coordinate")]
    InvalidLongitude {
        /// Node index of the offending location (0 = depot).
        id: usize,
        /// The rejected value.
        lng: f64,
    },
    /// Vehicle capacity must be strictly positive.
    #[error("vehicle {id}: capacity must be positive")]
    NonPositiveCapacity {
        /// Identity of the offending vehicle.
        id: usize,
    },
}
