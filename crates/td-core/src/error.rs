//! Engine error type.
//!
//! Unknown names and unreachable pairs at query time are *not* errors — the
//! query surface returns `Option` for those.  `TdError` covers build-time
//! failures only.

use thiserror::Error;

/// The top-level error type for `td-*` crates.
#[derive(Debug, Error)]
pub enum TdError {
    /// A stop item or bus route referenced a stop name that no `Stop`
    /// configuration item declares.
    #[error("{referrer:?} references undeclared stop {stop:?}")]
    UndeclaredStop { referrer: String, stop: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `td-*` crates.
pub type TdResult<T> = Result<T, TdError>;
