//! Transit catalogue server.
//!
//! Loads a bus network (stops, road distances, routes) and answers queries
//! about it: route statistics, buses through a stop, an SVG map, and the
//! fastest itinerary between two stops.

pub mod cache;
pub mod catalogue;
pub mod domain;
pub mod logger;
pub mod render;
pub mod requests;
pub mod router;
pub mod web;
