//! Query results returned by the directory.
//!
//! Result types borrow name strings from the directory rather than cloning
//! them; response formatting happens in the caller's layer (`td-json`).

/// Summary statistics for one bus.
#[derive(Clone, Debug, PartialEq)]
pub struct BusStats {
    /// Stops visited along the stored traversal, repeats included.
    pub stops_count: usize,
    /// Distinct stops on the route.
    pub unique_stops_count: usize,
    /// Road length in metres, summed over consecutive route pairs.
    pub road_route_length: f64,
    /// Great-circle length in metres over the same pairs.
    pub geo_route_length: f64,
}

impl BusStats {
    /// Road length over geo length.  ≥ 1 for physically plausible roads;
    /// unguarded division, so a zero geo length yields ∞/NaN.
    pub fn curvature(&self) -> f64 {
        self.road_route_length / self.geo_route_length
    }
}

/// Buses serving one stop, sorted lexicographically.
#[derive(Clone, Debug, PartialEq)]
pub struct StopInfo<'a> {
    pub buses: Vec<&'a str>,
}

/// One leg of a reconstructed journey.  Legs alternate `Wait`, `Ride` in
/// time-forward order, starting with a `Wait`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Leg<'a> {
    /// Platform wait at `stop` before boarding.
    Wait { stop: &'a str, time: f64 },
    /// A ride covering `span_count` consecutive stops of one bus's route.
    Ride {
        bus: &'a str,
        span_count: u16,
        time: f64,
    },
}

/// A shortest-time journey between two stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary<'a> {
    /// Sum of all wait and ride times.  Zero for the self-journey.
    pub total_time: f64,
    pub legs: Vec<Leg<'a>>,
}

impl<'a> Itinerary<'a> {
    /// The trivial journey from a stop to itself.
    pub fn empty() -> Self {
        Self {
            total_time: 0.0,
            legs: Vec::new(),
        }
    }
}
