//! Routing configuration.

/// Error returned when routing settings are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("bus wait time must be positive, got {0}")]
    NonPositiveWaitTime(i64),

    #[error("bus velocity must be a positive finite number, got {0}")]
    InvalidVelocity(f64),
}

/// Parameters for turning road distances into travel times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Minutes spent waiting each time a bus is boarded.
    bus_wait_time_mins: u32,

    /// Bus speed in km/h.
    bus_velocity_kmh: f64,
}

impl RoutingSettings {
    /// Create settings, validating that both values are positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_server::router::RoutingSettings;
    ///
    /// let settings = RoutingSettings::new(6, 40.0).unwrap();
    /// assert_eq!(settings.bus_wait_time(), 6.0);
    ///
    /// assert!(RoutingSettings::new(0, 40.0).is_err());
    /// assert!(RoutingSettings::new(6, -1.0).is_err());
    /// ```
    pub fn new(bus_wait_time_mins: i64, bus_velocity_kmh: f64) -> Result<Self, SettingsError> {
        let bus_wait_time_mins = u32::try_from(bus_wait_time_mins)
            .ok()
            .filter(|mins| *mins > 0)
            .ok_or(SettingsError::NonPositiveWaitTime(bus_wait_time_mins))?;

        if !bus_velocity_kmh.is_finite() || bus_velocity_kmh <= 0.0 {
            return Err(SettingsError::InvalidVelocity(bus_velocity_kmh));
        }

        Ok(Self {
            bus_wait_time_mins,
            bus_velocity_kmh,
        })
    }

    /// Boarding wait in minutes.
    pub fn bus_wait_time(&self) -> f64 {
        f64::from(self.bus_wait_time_mins)
    }

    /// Bus speed in km/h.
    pub fn bus_velocity_kmh(&self) -> f64 {
        self.bus_velocity_kmh
    }

    /// Bus speed in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity_kmh * 1000.0 / 60.0
    }

    /// Minutes needed to ride `meters` of road.
    pub fn ride_time(&self, meters: u64) -> f64 {
        meters as f64 / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time_mins: 6,
            bus_velocity_kmh: 40.0,
        }
    }
}
