//! Turns a path of graph edges into passenger actions.

use super::builder::TransitGraph;
use super::config::RoutingSettings;
use super::dijkstra::RouteInfo;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Wait at a stop for a bus.
    Wait { stop: String, minutes: f64 },
    /// Ride a bus for `span_count` stops.
    Ride {
        bus: String,
        span_count: usize,
        minutes: f64,
    },
}

impl Action {
    pub fn minutes(&self) -> f64 {
        match self {
            Action::Wait { minutes, .. } | Action::Ride { minutes, .. } => *minutes,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, Action::Wait { .. })
    }
}

/// A complete trip: alternating waits and rides.
///
/// # Invariants
///
/// - Every `Ride` is immediately preceded by exactly one `Wait`
/// - `total_time` equals the weight of the path it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub total_time: f64,
    pub actions: Vec<Action>,
}

impl Itinerary {
    /// Reconstruct the itinerary for `route`, preserving edge order.
    ///
    /// Each edge is one boarding: a wait at its origin stop, then the ride
    /// with the wait subtracted from the edge weight. Returns `None` if the
    /// route references edges or vertices that are not in `graph`.
    pub fn from_route(
        graph: &TransitGraph,
        settings: &RoutingSettings,
        route: &RouteInfo,
    ) -> Option<Self> {
        let wait = settings.bus_wait_time();
        let mut actions = Vec::with_capacity(route.edges.len() * 2);
        let mut total_time = 0.0;

        for &edge_id in &route.edges {
            let edge = graph.graph().edge(edge_id)?;
            let ride = graph.ride(edge_id)?;
            let stop = graph.stop_name(edge.from)?;

            actions.push(Action::Wait {
                stop: stop.to_string(),
                minutes: wait,
            });
            actions.push(Action::Ride {
                bus: ride.bus.to_string(),
                span_count: ride.span_count,
                minutes: edge.weight - wait,
            });
            total_time += edge.weight;
        }

        Some(Self {
            total_time,
            actions,
        })
    }

    /// Number of buses boarded.
    pub fn boardings(&self) -> usize {
        self.actions.iter().filter(|a| !a.is_wait()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::domain::{Coordinates, RouteType};
    use crate::router::dijkstra::PathFinder;

    fn network() -> (TransitGraph, RoutingSettings) {
        let mut c = Catalogue::new();
        for (i, name) in ["A", "M", "B"].iter().enumerate() {
            c.add_stop(name, Coordinates::new(0.0, i as f64).unwrap())
                .unwrap();
        }
        c.set_distance("A", "M", 2000).unwrap();
        c.set_distance("M", "B", 3000).unwrap();
        c.add_bus("1", RouteType::Line, &["A", "M"]).unwrap();
        c.add_bus("2", RouteType::Line, &["M", "B"]).unwrap();

        let settings = RoutingSettings::new(5, 60.0).unwrap();
        (TransitGraph::build(&c, &settings).unwrap(), settings)
    }

    #[test]
    fn transfer_alternates_wait_and_ride() {
        let (g, settings) = network();
        let route = PathFinder::new(g.graph())
            .build_route(g.vertex("A").unwrap(), g.vertex("B").unwrap())
            .unwrap();
        let itinerary = Itinerary::from_route(&g, &settings, &route).unwrap();

        assert_eq!(
            itinerary.actions,
            vec![
                Action::Wait {
                    stop: "A".into(),
                    minutes: 5.0
                },
                Action::Ride {
                    bus: "1".into(),
                    span_count: 1,
                    minutes: 2.0
                },
                Action::Wait {
                    stop: "M".into(),
                    minutes: 5.0
                },
                Action::Ride {
                    bus: "2".into(),
                    span_count: 1,
                    minutes: 3.0
                },
            ]
        );
        assert_eq!(itinerary.total_time, 15.0);
        assert_eq!(itinerary.total_time, route.weight);
        assert_eq!(itinerary.boardings(), 2);
    }

    #[test]
    fn empty_route_is_empty_itinerary() {
        let (g, settings) = network();
        let route = RouteInfo {
            weight: 0.0,
            edges: vec![],
        };
        let itinerary = Itinerary::from_route(&g, &settings, &route).unwrap();
        assert!(itinerary.actions.is_empty());
        assert_eq!(itinerary.total_time, 0.0);
    }

    #[test]
    fn foreign_edge_is_rejected() {
        let (g, settings) = network();
        let route = RouteInfo {
            weight: 1.0,
            edges: vec![999],
        };
        assert!(Itinerary::from_route(&g, &settings, &route).is_none());
    }

    #[test]
    fn action_accessors() {
        let wait = Action::Wait {
            stop: "A".into(),
            minutes: 6.0,
        };
        assert!(wait.is_wait());
        assert_eq!(wait.minutes(), 6.0);
    }
}
