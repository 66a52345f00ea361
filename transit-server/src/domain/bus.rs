//! Bus route types.

use std::collections::HashSet;
use std::fmt;

use super::StopId;

/// Stable handle to a bus inside a [`Catalogue`](crate::catalogue::Catalogue).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl fmt::Debug for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusId({})", self.0)
    }
}

/// How a bus traverses its stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteType {
    /// Closed loop: the stop list already ends where it started and is
    /// traversed once, forward only.
    Ring,
    /// There and back: the stop list is the outbound half, and the bus
    /// returns along the same stops in reverse.
    Line,
}

impl RouteType {
    /// Map the `is_roundtrip` flag of a bus definition to a route type.
    pub fn from_roundtrip(is_roundtrip: bool) -> Self {
        if is_roundtrip {
            RouteType::Ring
        } else {
            RouteType::Line
        }
    }
}

/// A named bus route: an ordered sequence of stops.
///
/// The stop order is exactly the order given at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    id: BusId,
    name: String,
    route_type: RouteType,
    stops: Vec<StopId>,
}

impl Bus {
    pub(crate) fn new(id: BusId, name: String, route_type: RouteType, stops: Vec<StopId>) -> Self {
        Self {
            id,
            name,
            route_type,
            stops,
        }
    }

    pub fn id(&self) -> BusId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    pub fn is_line(&self) -> bool {
        self.route_type == RouteType::Line
    }

    /// The stops as given, in order.
    ///
    /// For a `Line` route this is the outbound half only; see
    /// [`Bus::full_route`] for the complete traversal.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first_stop(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// The far end of the route: the last given stop.
    pub fn last_stop(&self) -> Option<StopId> {
        self.stops.last().copied()
    }

    /// Every stop the bus calls at, in traversal order.
    ///
    /// A `Line` route A, B, C is traversed as A, B, C, B, A.
    pub fn full_route(&self) -> Vec<StopId> {
        let mut route = self.stops.clone();
        if self.is_line() && self.stops.len() > 1 {
            route.extend(self.stops.iter().rev().skip(1));
        }
        route
    }

    /// Number of stop calls along the full traversal.
    pub fn stop_count(&self) -> usize {
        match (self.route_type, self.stops.len()) {
            (_, 0) => 0,
            (RouteType::Ring, n) => n,
            (RouteType::Line, n) => 2 * n - 1,
        }
    }

    /// Number of distinct stops on the route.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }
}
