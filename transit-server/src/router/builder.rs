//! Builds the routing graph from a catalogue.
//!
//! Every stop is one vertex. For every bus and every pair of route positions
//! i < j we add a single edge "board at stop i, ride j - i stops, alight at
//! stop j". The boarding wait is folded into each edge, so it is charged once
//! per boarding and never per intermediate hop.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalogue::Catalogue;

use super::config::RoutingSettings;
use super::graph::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};

/// What riding along an edge means: which bus, and for how many stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    pub bus: Arc<str>,
    pub span_count: usize,
}

/// Immutable routing graph plus the stop name ↔ vertex mapping.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    graph: DirectedWeightedGraph,
    /// Ride label per edge, indexed by `EdgeId`.
    rides: Vec<Ride>,
    /// Stop name per vertex, indexed by `VertexId`.
    stop_names: Vec<Arc<str>>,
    vertices: BTreeMap<Arc<str>, VertexId>,
}

impl TransitGraph {
    /// Build the graph for every bus in the catalogue.
    ///
    /// Vertices are numbered in stop-name order and edges are added bus by
    /// bus in bus-name order, so two builds from the same catalogue are
    /// identical.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if an edge weight is invalid. With validated
    /// [`RoutingSettings`] this does not happen.
    pub fn build(catalogue: &Catalogue, settings: &RoutingSettings) -> Result<Self, GraphError> {
        let mut stop_names = Vec::with_capacity(catalogue.stop_count());
        let mut vertices = BTreeMap::new();
        let mut vertex_of_stop = vec![0; catalogue.stop_count()];

        for (vertex, stop) in catalogue.all_stops().enumerate() {
            let name: Arc<str> = Arc::from(stop.name());
            vertex_of_stop[stop.id().0] = vertex;
            vertices.insert(name.clone(), vertex);
            stop_names.push(name);
        }

        let mut graph = DirectedWeightedGraph::new(stop_names.len());
        let mut rides = Vec::new();
        let wait = settings.bus_wait_time();

        for bus in catalogue.all_buses() {
            let bus_name: Arc<str> = Arc::from(bus.name());
            let stops = bus.stops();
            let distances = catalogue.route_distances(bus);

            for window in distances.windows() {
                let from = vertex_of_stop[stops[window.from].0];
                let to = vertex_of_stop[stops[window.to].0];
                let ride = Ride {
                    bus: bus_name.clone(),
                    span_count: window.span_count(),
                };

                graph.add_edge(Edge {
                    from,
                    to,
                    weight: wait + settings.ride_time(window.forward_m),
                })?;
                rides.push(ride.clone());

                if bus.is_line() {
                    graph.add_edge(Edge {
                        from: to,
                        to: from,
                        weight: wait + settings.ride_time(window.reverse_m),
                    })?;
                    rides.push(ride);
                }
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            buses = catalogue.bus_count(),
            "built transit graph"
        );

        Ok(Self {
            graph,
            rides,
            stop_names,
            vertices,
        })
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// The ride an edge represents.
    pub fn ride(&self, edge: EdgeId) -> Option<&Ride> {
        self.rides.get(edge)
    }

    /// Vertex for a stop name.
    pub fn vertex(&self, stop: &str) -> Option<VertexId> {
        self.vertices.get(stop).copied()
    }

    /// Stop name for a vertex.
    pub fn stop_name(&self, vertex: VertexId) -> Option<&str> {
        self.stop_names.get(vertex).map(|name| name.as_ref())
    }

    /// Every edge with its ride label, in insertion order.
    pub fn labelled_edges(&self) -> impl Iterator<Item = (&Edge, &Ride)> + '_ {
        self.graph.edges().iter().zip(&self.rides)
    }
}
