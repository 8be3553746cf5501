//! Failure type shared by the data gateways.

use thiserror::Error;

/// Errors a data gateway can resolve with.
///
/// Stores never inspect the variant: the `Display` output is the
/// human-readable cause they embed in alert messages, and every failure is
/// recovered at the effect boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backing service could not be reached or answered abnormally.
    #[error("request failed: {reason}")]
    Unavailable { reason: String },

    /// The gateway gave up waiting. Timeouts are the gateway's business;
    /// stores only ever see the settled failure.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The requested key does not exist upstream.
    #[error("'{key}' not found")]
    NotFound { key: String },
}
