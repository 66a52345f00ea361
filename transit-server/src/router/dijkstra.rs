//! Single-source shortest paths over a [`DirectedWeightedGraph`].
//!
//! All weights are non-negative (enforced by the graph), so Dijkstra's
//! algorithm applies. Each query allocates its own working state; the graph
//! is only borrowed, which makes concurrent queries over one graph safe.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// Result of a path query: the edges to follow, in order, and their total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Heap entry. Ordered so that `BinaryHeap` pops the cheapest entry first,
/// breaking ties on the lower vertex id.
#[derive(Debug)]
struct Node {
    vertex: VertexId,
    cost: f64,
}

impl Ord for Node {
    fn cmp(&self, other: &Node) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .reverse()
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Node) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Shortest-path queries against a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g DirectedWeightedGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g DirectedWeightedGraph) -> Self {
        Self { graph }
    }

    /// Cheapest path from `from` to `to`.
    ///
    /// Returns `None` if either vertex is out of range or `to` is
    /// unreachable. A query from a vertex to itself is an empty path of
    /// weight 0.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo> {
        let vertex_count = self.graph.vertex_count();
        if from >= vertex_count || to >= vertex_count {
            return None;
        }

        let mut best: Vec<Option<f64>> = vec![None; vertex_count];
        let mut entry: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut closed = vec![false; vertex_count];
        let mut heap = BinaryHeap::new();

        best[from] = Some(0.0);
        heap.push(Node {
            vertex: from,
            cost: 0.0,
        });

        while let Some(Node { vertex, cost }) = heap.pop() {
            if closed[vertex] {
                continue;
            }
            closed[vertex] = true;
            if vertex == to {
                break;
            }

            for &edge_id in self.graph.outgoing(vertex) {
                let Some(edge) = self.graph.edge(edge_id) else {
                    continue;
                };
                if closed[edge.to] {
                    continue;
                }
                let candidate = cost + edge.weight;
                if best[edge.to].is_none_or(|current| candidate < current) {
                    best[edge.to] = Some(candidate);
                    entry[edge.to] = Some(edge_id);
                    heap.push(Node {
                        vertex: edge.to,
                        cost: candidate,
                    });
                }
            }
        }

        let weight = best[to]?;
        let edges = self.trace_back(from, to, &entry)?;
        trace!(from, to, weight, hops = edges.len(), "route found");
        Some(RouteInfo { weight, edges })
    }

    /// Follow entry edges backwards from `to` until `from` is reached.
    fn trace_back(
        &self,
        from: VertexId,
        to: VertexId,
        entry: &[Option<EdgeId>],
    ) -> Option<Vec<EdgeId>> {
        let mut edges = Vec::new();
        let mut vertex = to;
        while vertex != from {
            let edge_id = entry[vertex]?;
            edges.push(edge_id);
            vertex = self.graph.edge(edge_id)?.from;
        }
        edges.reverse();
        Some(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::graph::Edge;

    fn graph(vertices: usize, edges: &[(usize, usize, f64)]) -> DirectedWeightedGraph {
        let mut g = DirectedWeightedGraph::new(vertices);
        for &(from, to, weight) in edges {
            g.add_edge(Edge { from, to, weight }).unwrap();
        }
        g
    }

    #[test]
    fn direct_edge() {
        let g = graph(2, &[(0, 1, 3.0)]);
        let route = PathFinder::new(&g).build_route(0, 1).unwrap();
        assert_eq!(route.weight, 3.0);
        assert_eq!(route.edges, vec![0]);
    }

    #[test]
    fn prefers_cheaper_multi_hop() {
        let g = graph(3, &[(0, 2, 10.0), (0, 1, 2.0), (1, 2, 3.0)]);
        let route = PathFinder::new(&g).build_route(0, 2).unwrap();
        assert_eq!(route.weight, 5.0);
        assert_eq!(route.edges, vec![1, 2]);
    }

    #[test]
    fn respects_direction() {
        let g = graph(2, &[(0, 1, 1.0)]);
        assert!(PathFinder::new(&g).build_route(1, 0).is_none());
    }

    #[test]
    fn unreachable() {
        let g = graph(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert!(PathFinder::new(&g).build_route(0, 3).is_none());
    }

    #[test]
    fn same_vertex_is_empty_route() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let route = PathFinder::new(&g).build_route(1, 1).unwrap();
        assert_eq!(route.weight, 0.0);
        assert!(route.edges.is_empty());
    }

    #[test]
    fn out_of_range_vertex() {
        let g = graph(2, &[(0, 1, 1.0)]);
        assert!(PathFinder::new(&g).build_route(0, 9).is_none());
        assert!(PathFinder::new(&g).build_route(9, 0).is_none());
    }

    #[test]
    fn ties_are_deterministic() {
        // Two equal-cost parallel edges: the first inserted wins every time
        let g = graph(2, &[(0, 1, 4.0), (0, 1, 4.0)]);
        for _ in 0..10 {
            let route = PathFinder::new(&g).build_route(0, 1).unwrap();
            assert_eq!(route.edges, vec![0]);
        }
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        let route = PathFinder::new(&g).build_route(0, 2).unwrap();
        assert_eq!(route.weight, 0.0);
        assert_eq!(route.edges.len(), 2);
    }

    #[test]
    fn self_loops_are_ignored() {
        let g = graph(2, &[(0, 0, 1.0), (0, 1, 2.0)]);
        let route = PathFinder::new(&g).build_route(0, 1).unwrap();
        assert_eq!(route.edges, vec![1]);
    }
}
