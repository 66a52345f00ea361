//! Fastest-route search over the bus network.
//!
//! The catalogue is turned into a [`TransitGraph`] once; each query then runs
//! Dijkstra's algorithm over it and reconstructs a wait/ride [`Itinerary`].

mod builder;
mod config;
mod dijkstra;
mod graph;
mod itinerary;
mod transit;

pub use builder::{Ride, TransitGraph};
pub use config::{RoutingSettings, SettingsError};
pub use dijkstra::{PathFinder, RouteInfo};
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};
pub use itinerary::{Action, Itinerary};
pub use transit::TransitRouter;
