//! Great-circle distance between coordinate pairs.

use crate::models::Location;

/// Earth's mean radius in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations in km.
///
/// Uses the half-angle haversine formula on a sphere of radius
/// [`EARTH_RADIUS_KM`]. Symmetric, non-negative, and zero exactly when
/// both coordinates coincide.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::distance::haversine_km;
///
/// let a = Location::depot(0.0, 0.0);
/// let b = Location::delivery(1, 0.0, 1.0);
/// let d = haversine_km(&a, &b);
/// // One degree of longitude on the equator is about 111.2 km.
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let lat1 = a.lat().to_radians();
    let lng1 = a.lng().to_radians();
    let lat2 = b.lat().to_radians();
    let lng2 = b.lng().to_radians();

    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
