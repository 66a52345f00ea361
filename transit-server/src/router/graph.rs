//! Directed weighted graph with non-negative weights.

/// Vertex index, dense in `0..vertex_count`.
pub type VertexId = usize;

/// Edge index, in insertion order.
pub type EdgeId = usize;

/// A directed edge with a travel-time weight in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Error raised while building a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Weights must be finite and non-negative for shortest paths to be valid
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },
}

/// Adjacency-list graph. Edges are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append an edge and return its id.
    ///
    /// # Errors
    ///
    /// Rejects negative, NaN or infinite weights and endpoints outside the
    /// graph, so the shortest-path engine never sees them.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });
        }
        for vertex in [edge.from, edge.to] {
            if vertex >= self.vertex_count() {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count(),
                });
            }
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_read_edges() {
        let mut g = DirectedWeightedGraph::new(3);
        let e0 = g.add_edge(Edge { from: 0, to: 1, weight: 2.5 }).unwrap();
        let e1 = g.add_edge(Edge { from: 0, to: 2, weight: 0.0 }).unwrap();

        assert_eq!((e0, e1), (0, 1));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.outgoing(0), &[0, 1]);
        assert!(g.outgoing(1).is_empty());
        assert_eq!(g.edge(1).unwrap().to, 2);
        assert!(g.edge(2).is_none());
    }

    #[test]
    fn rejects_negative_weight() {
        let mut g = DirectedWeightedGraph::new(2);
        let err = g.add_edge(Edge { from: 0, to: 1, weight: -1.0 }).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn rejects_non_finite_weight() {
        let mut g = DirectedWeightedGraph::new(2);
        assert!(g.add_edge(Edge { from: 0, to: 1, weight: f64::NAN }).is_err());
        assert!(g.add_edge(Edge { from: 0, to: 1, weight: f64::INFINITY }).is_err());
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let mut g = DirectedWeightedGraph::new(2);
        let err = g.add_edge(Edge { from: 0, to: 5, weight: 1.0 }).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn outgoing_out_of_range_is_empty() {
        let g = DirectedWeightedGraph::new(1);
        assert!(g.outgoing(10).is_empty());
    }
}
