//! Interned network entities.
//!
//! Stops and buses cross-reference each other exclusively through dense
//! integer ids into two flat `Vec`s — no pointer graph.  The canonical name
//! string lives in the entity itself; the registries in
//! [`crate::directory::TransportDirectory`] map name → id and the reverse
//! lookup is `entities[id].name`.

use std::collections::HashSet;

use td_core::{BusId, GeoPoint, StopId};

/// A transit node.  Default-constructed on registration, filled in when the
/// stop's own configuration item is processed.
#[derive(Clone, Debug, Default)]
pub struct Stop {
    pub name: String,
    pub coords: GeoPoint,
    /// Stops with an explicit road distance in either direction.
    pub adjacent: HashSet<StopId>,
    /// Buses whose route visits this stop.
    pub buses: HashSet<BusId>,
}

/// A named ordered traversal of stops.
///
/// For linear buses the stored route is the palindromic expansion produced by
/// the parser; `is_roundtrip` records the original shape.
#[derive(Clone, Debug, Default)]
pub struct Bus {
    pub name: String,
    pub route: Vec<StopId>,
    pub is_roundtrip: bool,
}
