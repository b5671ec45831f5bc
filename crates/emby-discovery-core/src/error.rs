//! Error types for Emby server discovery.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Session-fatal discovery errors.
///
/// Every variant means no probe left the host (or it is unknown whether it
/// did), so no partial result exists.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to open discovery socket: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Failed to enable broadcast on discovery socket: {0}")]
    Broadcast(#[source] std::io::Error),

    #[error("Failed to send discovery probe to {target}: {source}")]
    Send {
        target: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Sending discovery probe to {target} timed out after {timeout:?}")]
    SendTimeout { target: SocketAddr, timeout: Duration },

    #[error("Discovery session has already run")]
    AlreadyRun,
}

impl DiscoveryError {
    /// Whether this error belongs to the send-failure class (socket setup,
    /// broadcast enablement or transmission).
    pub fn is_send_failure(&self) -> bool {
        !matches!(self, DiscoveryError::AlreadyRun)
    }
}

/// Per-datagram decode errors. These never reach the caller; the datagram
/// is dropped and the session keeps listening.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Response is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response has no server address")]
    MissingAddress,
}

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
