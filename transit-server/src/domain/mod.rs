//! Domain types for the transit catalogue.
//!
//! This module contains the core model types: stops, bus routes and
//! coordinates. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod bus;
mod error;
mod geo;
mod stop;

pub use bus::{Bus, BusId, RouteType};
pub use error::DomainError;
pub use geo::{Coordinates, EARTH_RADIUS_M, InvalidCoordinates};
pub use stop::{Stop, StopId};
