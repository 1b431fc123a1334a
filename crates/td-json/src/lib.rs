//! `td-json` — the JSON wire format around the directory engine.
//!
//! One input document describes the network and the queries:
//!
//! ```json
//! {
//!   "base_requests": [
//!     { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.6,
//!       "road_distances": { "B": 1000 } },
//!     { "type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false }
//!   ],
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 30 },
//!   "stat_requests": [
//!     { "id": 1, "type": "Route", "from": "A", "to": "B" }
//!   ]
//! }
//! ```
//!
//! The reply is one JSON array with one object per stat request.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`config`]  | `InputDocument` and the base-request DTOs                 |
//! | [`request`] | `StatRequest`, `StatResponse`, dispatch                   |
//! | [`error`]   | `JsonError`, `JsonResult<T>`                              |
//!
//! Unit normalization happens here and only here: wire velocity is km/h,
//! the engine wants metres per minute; linear bus routes are palindromized
//! before the engine sees them.

pub mod config;
pub mod error;
pub mod request;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::InputDocument;
pub use error::{JsonError, JsonResult};
pub use request::{StatRequest, StatResponse};

use td_directory::TransportDirectory;

/// Process one full request document: parse, build the directory, answer
/// every stat request, and serialize the reply array.
pub fn process_document(input: &str) -> JsonResult<String> {
    let document = config::parse_document(input)?;
    let (config, stat_requests) = document.into_parts();
    let directory = TransportDirectory::build(config)?;
    let responses = request::process_all(&directory, &stat_requests);
    Ok(serde_json::to_string(&responses)?)
}
