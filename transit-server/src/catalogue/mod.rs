//! Name-indexed registry of stops and buses with directed road distances.
//!
//! The catalogue is populated once and then only read. Stops and buses live
//! in arenas addressed by [`StopId`] and [`BusId`]; the stop → buses
//! back-reference is a reverse index, never ownership.

mod distances;
mod stats;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::trace;

use crate::domain::{Bus, BusId, Coordinates, DomainError, RouteType, Stop, StopId};

pub use distances::{CumulativeDistances, SegmentWindow, SegmentWindows};
pub use stats::BusStats;

/// Registry of stops, buses and the directed distances between stops.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stops_by_name: BTreeMap<String, StopId>,
    buses_by_name: BTreeMap<String, BusId>,
    /// Road distance in meters, keyed by (from, to). Not symmetric.
    distances: HashMap<(StopId, StopId), u32>,
    /// Buses calling at each stop, indexed by `StopId`.
    buses_at_stop: Vec<BTreeSet<BusId>>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateStop`] if the name is taken.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> Result<StopId, DomainError> {
        if self.stops_by_name.contains_key(name) {
            return Err(DomainError::DuplicateStop(name.to_string()));
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(id, name.to_string(), coordinates));
        self.stops_by_name.insert(name.to_string(), id);
        self.buses_at_stop.push(BTreeSet::new());
        trace!(stop = name, ?id, "added stop");
        Ok(id)
    }

    /// Register a bus calling at `stops` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownStop`] if any stop was never added, or
    /// [`DomainError::DuplicateBus`] if the name is taken. Nothing is
    /// registered on error.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        route_type: RouteType,
        stops: &[S],
    ) -> Result<BusId, DomainError> {
        if self.buses_by_name.contains_key(name) {
            return Err(DomainError::DuplicateBus(name.to_string()));
        }

        let route = stops
            .iter()
            .map(|stop| {
                let stop = stop.as_ref();
                self.stops_by_name
                    .get(stop)
                    .copied()
                    .ok_or_else(|| DomainError::UnknownStop {
                        stop: stop.to_string(),
                        referrer: format!("bus {name}"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let id = BusId(self.buses.len());
        for stop in &route {
            self.buses_at_stop[stop.0].insert(id);
        }
        trace!(bus = name, ?id, stops = route.len(), ?route_type, "added bus");
        self.buses.push(Bus::new(id, name.to_string(), route_type, route));
        self.buses_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Set the road distance from one stop to another.
    ///
    /// Directed: the reverse direction is untouched. Setting the same pair
    /// again overwrites the previous value.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), DomainError> {
        let resolve = |stop: &str| {
            self.stops_by_name
                .get(stop)
                .copied()
                .ok_or_else(|| DomainError::UnknownStop {
                    stop: stop.to_string(),
                    referrer: format!("distance {from} -> {to}"),
                })
        };
        let key = (resolve(from)?, resolve(to)?);
        self.distances.insert(key, meters);
        Ok(())
    }

    /// Road distance between two stops by name.
    ///
    /// See [`Catalogue::distance`] for the fallback rules. Unknown names
    /// yield 0.
    pub fn get_distance(&self, from: &str, to: &str) -> u32 {
        match (self.stops_by_name.get(from), self.stops_by_name.get(to)) {
            (Some(&from), Some(&to)) => self.distance(from, to),
            _ => 0,
        }
    }

    /// Road distance between two stops.
    ///
    /// Returns the distance set for `from -> to`; if none was set, the
    /// distance set for `to -> from`; otherwise 0.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops_by_name.get(name).and_then(|id| self.stop_by_id(*id))
    }

    /// Look up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses_by_name.get(name).and_then(|id| self.bus_by_id(*id))
    }

    pub fn stop_by_id(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    pub fn bus_by_id(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.0)
    }

    /// All stops, ordered by name.
    pub fn all_stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.stops_by_name.values().map(|id| &self.stops[id.0])
    }

    /// All buses, ordered by name.
    pub fn all_buses(&self) -> impl Iterator<Item = &Bus> + '_ {
        self.buses_by_name.values().map(|id| &self.buses[id.0])
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Names of the buses calling at a stop, sorted.
    ///
    /// Returns `None` if the stop is unknown, and an empty list if no bus
    /// calls there.
    pub fn buses_through(&self, stop: &str) -> Option<Vec<&str>> {
        let id = self.stops_by_name.get(stop)?;
        let mut names: Vec<&str> = self.buses_at_stop[id.0]
            .iter()
            .map(|bus| self.buses[bus.0].name())
            .collect();
        names.sort_unstable();
        Some(names)
    }

    /// Whether any bus calls at the stop.
    pub fn is_served(&self, id: StopId) -> bool {
        self.buses_at_stop
            .get(id.0)
            .is_some_and(|buses| !buses.is_empty())
    }

    /// Cumulative road distances along a bus's stored stop sequence.
    pub fn route_distances(&self, bus: &Bus) -> CumulativeDistances {
        CumulativeDistances::along(self, bus.stops())
    }

    /// Route statistics for a bus by name.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        self.bus(name).map(|bus| BusStats::compute(self, bus))
    }
}
