//! Stat-request dispatch and typed responses.
//!
//! Every request carries an `id` echoed back as `request_id`.  A miss of any
//! kind — unknown bus, unknown stop, unknown endpoint, unreachable pair —
//! produces `{ "request_id": …, "error_message": "not found" }`.

use serde::{Deserialize, Serialize};

use td_directory::{Leg, TransportDirectory};

// ── Requests ──────────────────────────────────────────────────────────────────

/// One entry of `stat_requests`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: u64, name: String },
    Stop { id: u64, name: String },
    Route { id: u64, from: String, to: String },
}

// ── Responses ─────────────────────────────────────────────────────────────────

/// One entry of the reply array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize)]
pub struct BusResponse {
    pub request_id: u64,
    pub curvature: f64,
    /// Road length truncated to an integer, per the response format.
    pub route_length: i64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

#[derive(Debug, Serialize)]
pub struct StopResponse {
    pub request_id: u64,
    pub buses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub request_id: u64,
    pub total_time: f64,
    pub items: Vec<ItineraryItem>,
}

/// One itinerary leg on the wire; waits and rides alternate.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ItineraryItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u16, time: f64 },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub request_id: u64,
    pub error_message: &'static str,
}

impl ErrorResponse {
    fn not_found(request_id: u64) -> StatResponse {
        StatResponse::Error(ErrorResponse {
            request_id,
            error_message: "not found",
        })
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Answer every request in order against one built directory.
pub fn process_all(
    directory: &TransportDirectory,
    requests: &[StatRequest],
) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| process(directory, request))
        .collect()
}

/// Answer a single request.
pub fn process(directory: &TransportDirectory, request: &StatRequest) -> StatResponse {
    match request {
        StatRequest::Bus { id, name } => match directory.bus(name) {
            Some(stats) => StatResponse::Bus(BusResponse {
                request_id: *id,
                curvature: stats.curvature(),
                route_length: stats.road_route_length as i64,
                stop_count: stats.stops_count,
                unique_stop_count: stats.unique_stops_count,
            }),
            None => ErrorResponse::not_found(*id),
        },

        StatRequest::Stop { id, name } => match directory.stop(name) {
            Some(info) => StatResponse::Stop(StopResponse {
                request_id: *id,
                buses: info.buses.iter().map(|&name| name.to_owned()).collect(),
            }),
            None => ErrorResponse::not_found(*id),
        },

        StatRequest::Route { id, from, to } => match directory.route(from, to) {
            Some(itinerary) => StatResponse::Route(RouteResponse {
                request_id: *id,
                total_time: itinerary.total_time,
                items: itinerary.legs.iter().map(ItineraryItem::from_leg).collect(),
            }),
            None => ErrorResponse::not_found(*id),
        },
    }
}

impl ItineraryItem {
    fn from_leg(leg: &Leg<'_>) -> Self {
        match *leg {
            Leg::Wait { stop, time } => ItineraryItem::Wait {
                stop_name: stop.to_owned(),
                time,
            },
            Leg::Ride {
                bus,
                span_count,
                time,
            } => ItineraryItem::Bus {
                bus: bus.to_owned(),
                span_count,
                time,
            },
        }
    }
}
