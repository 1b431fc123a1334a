//! Global routing parameters.

/// Network-wide routing constants, fixed for the directory's lifetime.
///
/// The wire format carries velocity in km/h; [`RoutingSettings::from_wire`]
/// is the single place that converts to metres per minute.  Constructing the
/// settings directly assumes the conversion has already happened.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Platform wait before every boarding, in minutes.  Non-negative.
    pub wait_time: f64,
    /// Bus velocity in metres per minute.  Positive.
    pub velocity: f64,
}

impl RoutingSettings {
    /// Build settings from wire units (`bus_wait_time` minutes,
    /// `bus_velocity` km/h).
    pub fn from_wire(bus_wait_time: f64, bus_velocity_kmh: f64) -> Self {
        Self {
            wait_time: bus_wait_time,
            velocity: bus_velocity_kmh * 1000.0 / 60.0,
        }
    }
}
