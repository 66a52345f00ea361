//! Geographic coordinates and great-circle distances.

use std::fmt;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Error returned when coordinates are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinates {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A point on the Earth's surface, in degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
///
/// # Examples
///
/// ```
/// use transit_server::domain::Coordinates;
///
/// let here = Coordinates::new(55.611087, 37.20829).unwrap();
/// assert_eq!(here.lat(), 55.611087);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinates {
                lat,
                lng,
                reason: "must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                lat,
                lng,
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates {
                lat,
                lng,
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another point, in meters.
    ///
    /// Uses the spherical law of cosines. Identical points are exactly 0 apart.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlng = (self.lng - other.lng).abs().to_radians();

        // Rounding can push the cosine just outside [-1, 1] for near-identical points
        let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos())
            .clamp(-1.0, 1.0);
        cos_angle.acos() * EARTH_RADIUS_M
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lat, self.lng)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_coords() -> impl Strategy<Value = Coordinates> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng).unwrap())
    }

    proptest! {
        /// Distances are never negative and never exceed half the circumference
        #[test]
        fn distance_is_bounded(a in any_coords(), b in any_coords()) {
            let d = a.distance_to(&b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
        }

        /// Swapping endpoints does not change the distance
        #[test]
        fn distance_symmetric(a in any_coords(), b in any_coords()) {
            prop_assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
        }
    }
}
