//! `td-directory` — the transit network index and journey engine.
//!
//! A [`TransportDirectory`] is built once from a [`config::Config`] and is
//! read-only afterwards.  Construction interns stop and bus names to dense
//! ids, fills three dense N×N tables (road distances, great-circle distances,
//! best-journey records) and closes the journey table over transfers with a
//! Floyd–Warshall pass.  Queries never mutate; the directory can be shared by
//! `&` across threads once built.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`config`]    | `Config`, `Item`, `StopSeed`, `BusSeed`                  |
//! | [`directory`] | `TransportDirectory` — builder and query surface         |
//! | [`info`]      | Query results: `BusStats`, `StopInfo`, `Itinerary`, `Leg`|
//! | `model`       | Interned `Stop` / `Bus` entities (crate-internal)        |
//! | `matrix`      | Dense row-major square tables (crate-internal)           |
//! | `routing`     | Span filler and transfer closure (crate-internal)        |

pub mod config;
pub mod directory;
pub mod info;

mod matrix;
mod model;
mod routing;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BusSeed, Config, Item, StopSeed};
pub use directory::TransportDirectory;
pub use info::{BusStats, Itinerary, Leg, StopInfo};
