//! Stop types.

use std::fmt;

use super::Coordinates;

/// Stable handle to a stop inside a [`Catalogue`](crate::catalogue::Catalogue).
///
/// Handles are assigned in insertion order and are only meaningful for the
/// catalogue that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

/// A named point where buses call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    id: StopId,
    name: String,
    coordinates: Coordinates,
}

impl Stop {
    pub(crate) fn new(id: StopId, name: String, coordinates: Coordinates) -> Self {
        Self {
            id,
            name,
            coordinates,
        }
    }

    /// The catalogue handle of this stop.
    pub fn id(&self) -> StopId {
        self.id
    }

    /// The unique stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
