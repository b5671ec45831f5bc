//! Discovery session options.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::probe::{broadcast_target, MAX_DATAGRAM_SIZE};

/// Default time allowed for the probe send and for the listening window
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Discovery options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Where the probe is sent
    pub target: SocketAddr,
    /// Local address the session socket binds to
    pub bind_addr: SocketAddr,
    /// Upper bound on the probe send attempt
    pub send_timeout: Duration,
    /// How long replies are collected after a successful send
    pub listen_window: Duration,
    /// Receive buffer size
    pub max_datagram_size: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            target: broadcast_target(),
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            send_timeout: DEFAULT_TIMEOUT,
            listen_window: DEFAULT_TIMEOUT,
            max_datagram_size: MAX_DATAGRAM_SIZE,
        }
    }
}

impl DiscoveryOptions {
    /// Options where one caller timeout bounds both the send and the
    /// listening window.
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        let timeout = Duration::from_millis(timeout_ms);
        Self {
            send_timeout: timeout,
            listen_window: timeout,
            ..Self::default()
        }
    }
}
