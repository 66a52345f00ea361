//! Name-level routing over a built transit graph.

use tracing::{debug, info};

use crate::catalogue::Catalogue;

use super::builder::TransitGraph;
use super::config::RoutingSettings;
use super::dijkstra::{PathFinder, RouteInfo};
use super::graph::GraphError;
use super::itinerary::Itinerary;

/// Answers "fastest way from stop A to stop B" for one catalogue.
///
/// The graph is built once in [`TransitRouter::new`] and only read
/// afterwards; every query owns its own search state.
#[derive(Debug, Clone)]
pub struct TransitRouter {
    settings: RoutingSettings,
    graph: TransitGraph,
}

impl TransitRouter {
    /// Build the routing graph for `catalogue`.
    pub fn new(catalogue: &Catalogue, settings: RoutingSettings) -> Result<Self, GraphError> {
        let graph = TransitGraph::build(catalogue, &settings)?;
        info!(
            stops = graph.graph().vertex_count(),
            edges = graph.graph().edge_count(),
            wait = settings.bus_wait_time(),
            velocity = settings.bus_velocity_kmh(),
            "router ready"
        );
        Ok(Self { settings, graph })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Cheapest edge path between two stops.
    ///
    /// Returns `None` if either stop is unknown or `to` cannot be reached.
    pub fn find_route(&self, from: &str, to: &str) -> Option<RouteInfo> {
        let (Some(from_vertex), Some(to_vertex)) = (self.graph.vertex(from), self.graph.vertex(to))
        else {
            debug!(from, to, "route endpoint not found");
            return None;
        };

        let route = PathFinder::new(self.graph.graph()).build_route(from_vertex, to_vertex);
        if route.is_none() {
            debug!(from, to, "no route");
        }
        route
    }

    /// Turn a path from [`TransitRouter::find_route`] into passenger actions.
    pub fn build_itinerary(&self, route: &RouteInfo) -> Option<Itinerary> {
        Itinerary::from_route(&self.graph, &self.settings, route)
    }

    /// Find a route and reconstruct its itinerary in one step.
    pub fn plan(&self, from: &str, to: &str) -> Option<Itinerary> {
        let route = self.find_route(from, to)?;
        self.build_itinerary(&route)
    }
}
