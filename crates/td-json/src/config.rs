//! Input-document parsing: wire DTOs and their conversion into the engine's
//! [`Config`].
//!
//! The DTOs mirror the wire exactly; [`InputDocument::into_parts`] performs
//! the two normalizations the engine relies on:
//!
//! - velocity km/h → metres per minute (via [`RoutingSettings::from_wire`]);
//! - non-roundtrip routes expanded to the palindromic traversal
//!   (`A,B,C` → `A,B,C,B,A`).
//!
//! `road_distances` deserializes into a `BTreeMap` so that the order in which
//! neighbour names are first mentioned — and therefore id assignment — is
//! deterministic regardless of hash seeding.

use std::collections::BTreeMap;

use serde::Deserialize;

use td_core::{GeoPoint, RoutingSettings};
use td_directory::config::{BusSeed, Config, Item, StopSeed};

use crate::error::JsonResult;
use crate::request::StatRequest;

// ── Wire DTOs ─────────────────────────────────────────────────────────────────

/// The single JSON object read from stdin.
#[derive(Debug, Deserialize)]
pub struct InputDocument {
    base_requests: Vec<BaseItem>,
    routing_settings: RoutingSettingsDto,
    #[serde(default)]
    stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum BaseItem {
    Stop(StopDto),
    Bus(BusDto),
}

#[derive(Debug, Deserialize)]
struct StopDto {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    road_distances: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct BusDto {
    name: String,
    stops: Vec<String>,
    is_roundtrip: bool,
}

#[derive(Debug, Deserialize)]
struct RoutingSettingsDto {
    bus_wait_time: f64,
    /// km/h on the wire.
    bus_velocity: f64,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Deserialize one request document.
pub fn parse_document(input: &str) -> JsonResult<InputDocument> {
    Ok(serde_json::from_str(input)?)
}

impl InputDocument {
    /// Split into the engine configuration and the queries to answer.
    pub fn into_parts(self) -> (Config, Vec<StatRequest>) {
        let items = self.base_requests.into_iter().map(BaseItem::into_item).collect();
        let routing_settings = RoutingSettings::from_wire(
            self.routing_settings.bus_wait_time,
            self.routing_settings.bus_velocity,
        );
        (
            Config {
                items,
                routing_settings,
            },
            self.stat_requests,
        )
    }
}

impl BaseItem {
    fn into_item(self) -> Item {
        match self {
            BaseItem::Stop(dto) => Item::Stop(StopSeed {
                name: dto.name,
                coords: GeoPoint::new(dto.latitude, dto.longitude),
                road_distances: dto.road_distances.into_iter().collect(),
            }),
            BaseItem::Bus(dto) => Item::Bus(BusSeed {
                name: dto.name,
                route: expand_route(dto.stops, dto.is_roundtrip),
                is_roundtrip: dto.is_roundtrip,
            }),
        }
    }
}

/// Expand a linear route to its palindromic traversal; roundtrip routes pass
/// through unchanged.
fn expand_route(stops: Vec<String>, is_roundtrip: bool) -> Vec<String> {
    if is_roundtrip {
        return stops;
    }
    let mut route = stops;
    route.reserve(route.len().saturating_sub(1));
    for i in (0..route.len().saturating_sub(1)).rev() {
        route.push(route[i].clone());
    }
    route
}
