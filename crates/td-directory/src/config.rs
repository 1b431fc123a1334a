//! Parsed configuration consumed by the directory builder.
//!
//! The engine sees a uniform, already-normalized description: velocities in
//! metres per minute and non-roundtrip bus routes expanded to their
//! palindromic traversal (A,B,C becomes A,B,C,B,A).  Both normalizations are
//! the parser's job (`td-json`); keeping them out of the core means exactly
//! one layer performs each conversion.

use td_core::{GeoPoint, RoutingSettings};

/// A stop declaration: position plus explicit road distances to neighbours.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSeed {
    pub name: String,
    pub coords: GeoPoint,
    /// Explicit one-way road distances in metres, `(neighbour name, d)`.
    /// The reverse direction defaults to the same value unless the neighbour
    /// declares its own.
    pub road_distances: Vec<(String, f64)>,
}

/// A bus declaration with its full stored traversal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusSeed {
    pub name: String,
    /// Ordered stop names, already palindromized for linear routes.
    pub route: Vec<String>,
    pub is_roundtrip: bool,
}

/// One configuration item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    Stop(StopSeed),
    Bus(BusSeed),
}

/// Everything needed to build a [`crate::TransportDirectory`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub items: Vec<Item>,
    pub routing_settings: RoutingSettings,
}
