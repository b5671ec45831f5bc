//! Discovery probe and reply decoding.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::DecodeError;
use crate::types::DiscoveryInfo;

/// Payload that solicits a reply from every server on the segment
pub const PROBE_MESSAGE: &str = "who is EmbyServer?";

/// Well-known UDP port servers listen on for the probe
pub const DISCOVERY_PORT: u16 = 7359;

/// Largest reply accepted; longer datagrams are truncated and fail to decode
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// Limited-broadcast address on the discovery port.
pub fn broadcast_target() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::BROADCAST), DISCOVERY_PORT)
}

pub fn probe_payload() -> &'static [u8] {
    PROBE_MESSAGE.as_bytes()
}

/// Decode one reply datagram into a [`DiscoveryInfo`].
///
/// Surrounding whitespace and NUL padding are ignored. A reply without a
/// usable address is rejected.
pub fn parse_response(bytes: &[u8]) -> Result<DiscoveryInfo, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');

    let info: DiscoveryInfo = serde_json::from_str(text)?;

    if info.address.trim().is_empty() {
        return Err(DecodeError::MissingAddress);
    }

    Ok(info)
}
