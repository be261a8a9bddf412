//! Error types internal to the oracle clients.
//!
//! These never cross the oracle boundary: every failure is recovered into
//! the fixed fallback result before the caller sees anything.

use thiserror::Error;

/// Errors a reaction oracle client can hit while talking to its backend.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The HTTP request could not be sent or returned a failure status.
    #[error("oracle request failed: {0}")]
    RequestFailed(String),

    /// The backend answered, but not with the required JSON shape.
    #[error("invalid oracle response: {0}")]
    InvalidResponse(String),
}
