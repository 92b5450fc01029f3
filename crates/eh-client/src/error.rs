//! Error kinds surfaced by the network layer
//!
//! Every client call resolves to `Result<T, AppError>`. The variants only
//! carry the kind of failure; there is no retry metadata.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure kinds reported by the gallery client
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AppError {
    /// Transport failure (timeout, connection reset, non-2xx status)
    #[error("network request failed")]
    NetworkingFailed,

    /// The response arrived but could not be parsed
    #[error("failed to parse response")]
    ParseFailed,

    /// Remote resource has not changed since the last fetch
    #[error("no updates available")]
    NoUpdates,

    /// The requested resource does not exist
    #[error("not found")]
    NotFound,

    /// The client IP is banned for the given interval
    #[error("IP banned for {interval}")]
    IpBanned { interval: String },

    /// The gallery was removed from the site
    #[error("gallery expunged: {reason}")]
    Expunged { reason: String },

    /// The stored member id is missing or malformed
    #[error("invalid member id")]
    InvalidUid,

    #[error("unknown error")]
    Unknown,
}

impl AppError {
    /// Whether a later retry of the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkingFailed | AppError::ParseFailed | AppError::Unknown
        )
    }
}
