//! Domain model types for delivery routing.
//!
//! Provides the core records: delivery locations with geographic
//! coordinates and demands, capacity-limited vehicles, the
//! depot-bookended routes produced by assembly, and the validation
//! errors raised before any routing work begins.

mod error;
mod location;
mod route;
mod vehicle;

pub use error::ValidationError;
pub use location::{Location, Role};
pub use route::Route;
pub use vehicle::Vehicle;
