//! Wire-layer error type.

use thiserror::Error;

use td_core::TdError;

/// Errors produced while parsing a request document or building the
/// directory from it.  Per-request misses ("not found") are not errors —
/// they become `error_message` entries in the reply array.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed request document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] TdError),
}

pub type JsonResult<T> = Result<T, JsonError>;
