//! Per-route statistics.

use crate::domain::Bus;

use super::Catalogue;

/// Summary of a bus route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stop calls along the full traversal (there and back for `Line`).
    pub stop_count: usize,
    /// Distinct stops on the route.
    pub unique_stop_count: usize,
    /// Road length of the full traversal in meters.
    pub route_length: u64,
    /// Road length divided by the great-circle length.
    ///
    /// 1.0 when the great-circle length is zero.
    pub curvature: f64,
}

impl BusStats {
    /// Compute statistics for `bus` using the catalogue's distances.
    pub fn compute(catalogue: &Catalogue, bus: &Bus) -> Self {
        let distances = catalogue.route_distances(bus);

        let mut route_length = distances.total_forward();
        let mut geo_length: f64 = bus
            .stops()
            .windows(2)
            .filter_map(|pair| {
                let from = catalogue.stop_by_id(pair[0])?;
                let to = catalogue.stop_by_id(pair[1])?;
                Some(from.coordinates().distance_to(&to.coordinates()))
            })
            .sum();

        if bus.is_line() {
            route_length += distances.total_reverse();
            geo_length *= 2.0;
        }

        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            1.0
        };

        Self {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalogue::Catalogue;
    use crate::domain::{Coordinates, RouteType};

    fn add(catalogue: &mut Catalogue, name: &str, lat: f64, lng: f64) {
        catalogue
            .add_stop(name, Coordinates::new(lat, lng).unwrap())
            .unwrap();
    }

    /// The classic two-route sample network.
    fn sample() -> Catalogue {
        let mut c = Catalogue::new();
        add(&mut c, "Tolstopaltsevo", 55.611087, 37.20829);
        add(&mut c, "Marushkino", 55.595884, 37.209755);
        add(&mut c, "Rasskazovka", 55.632761, 37.333324);
        add(&mut c, "Biryulyovo Zapadnoye", 55.574371, 37.6517);
        add(&mut c, "Biryusinka", 55.581065, 37.64839);
        add(&mut c, "Universam", 55.587655, 37.645687);
        add(&mut c, "Biryulyovo Tovarnaya", 55.592028, 37.653656);
        add(&mut c, "Biryulyovo Passazhirskaya", 55.580999, 37.659164);

        for (from, to, m) in [
            ("Tolstopaltsevo", "Marushkino", 3900),
            ("Marushkino", "Rasskazovka", 9900),
            ("Marushkino", "Marushkino", 100),
            ("Rasskazovka", "Marushkino", 9500),
            ("Biryulyovo Zapadnoye", "Biryusinka", 1800),
            ("Biryulyovo Zapadnoye", "Universam", 2400),
            ("Biryusinka", "Universam", 750),
            ("Universam", "Biryulyovo Tovarnaya", 900),
            ("Biryulyovo Tovarnaya", "Biryulyovo Passazhirskaya", 1300),
            ("Biryulyovo Passazhirskaya", "Biryulyovo Zapadnoye", 1200),
        ] {
            c.set_distance(from, to, m).unwrap();
        }

        c.add_bus(
            "256",
            RouteType::Ring,
            &[
                "Biryulyovo Zapadnoye",
                "Biryusinka",
                "Universam",
                "Biryulyovo Tovarnaya",
                "Biryulyovo Passazhirskaya",
                "Biryulyovo Zapadnoye",
            ],
        )
        .unwrap();
        c.add_bus(
            "750",
            RouteType::Line,
            &["Tolstopaltsevo", "Marushkino", "Marushkino", "Rasskazovka"],
        )
        .unwrap();
        c
    }

    #[test]
    fn ring_route_stats() {
        let stats = sample().bus_stats("256").unwrap();
        assert_eq!(stats.stop_count, 6);
        assert_eq!(stats.unique_stop_count, 5);
        assert_eq!(stats.route_length, 5950);
        assert!((stats.curvature - 1.36124).abs() < 1e-4, "{}", stats.curvature);
    }

    #[test]
    fn line_route_stats() {
        let stats = sample().bus_stats("750").unwrap();
        assert_eq!(stats.stop_count, 7);
        assert_eq!(stats.unique_stop_count, 3);
        // 3900 + 100 + 9900 there, 9500 + 100 + 3900 back
        assert_eq!(stats.route_length, 27400);
        assert!((stats.curvature - 1.30853).abs() < 1e-4, "{}", stats.curvature);
    }

    #[test]
    fn unknown_bus() {
        assert!(sample().bus_stats("751").is_none());
    }

    #[test]
    fn zero_geographic_length() {
        let mut c = Catalogue::new();
        add(&mut c, "A", 10.0, 10.0);
        add(&mut c, "B", 10.0, 10.0);
        c.set_distance("A", "B", 500).unwrap();
        c.add_bus("1", RouteType::Line, &["A", "B"]).unwrap();

        let stats = c.bus_stats("1").unwrap();
        assert_eq!(stats.route_length, 1000);
        assert_eq!(stats.curvature, 1.0);
    }

    #[test]
    fn empty_route() {
        let mut c = Catalogue::new();
        c.add_bus::<&str>("ghost", RouteType::Ring, &[]).unwrap();

        let stats = c.bus_stats("ghost").unwrap();
        assert_eq!(stats.stop_count, 0);
        assert_eq!(stats.unique_stop_count, 0);
        assert_eq!(stats.route_length, 0);
    }
}
