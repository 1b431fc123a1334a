//! `td-core` — foundational types for the `rust_td` transit directory engine.
//!
//! This crate is a dependency of every other `td-*` crate.  It intentionally
//! has no `td-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `StopId`, `BusId`                                   |
//! | [`geo`]      | `GeoPoint`, great-circle distance                   |
//! | [`settings`] | `RoutingSettings` (wait time, velocity)             |
//! | [`error`]    | `TdError`, `TdResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TdError, TdResult};
pub use geo::GeoPoint;
pub use ids::{BusId, StopId};
pub use settings::RoutingSettings;
