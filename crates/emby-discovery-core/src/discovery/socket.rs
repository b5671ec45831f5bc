//! Broadcast-capable UDP socket setup.

use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;

use crate::error::DiscoveryError;

/// Create a non-blocking UDP socket with SO_BROADCAST enabled.
pub fn create_broadcast_socket(bind_addr: SocketAddr) -> Result<std::net::UdpSocket, DiscoveryError> {
    let socket = Socket::new(Domain::for_address(bind_addr), Type::DGRAM, Some(Protocol::UDP))
        .map_err(DiscoveryError::Bind)?;

    socket.set_reuse_address(true).map_err(DiscoveryError::Bind)?;
    socket.set_broadcast(true).map_err(DiscoveryError::Broadcast)?;
    socket.bind(&bind_addr.into()).map_err(DiscoveryError::Bind)?;
    socket.set_nonblocking(true).map_err(DiscoveryError::Bind)?;

    Ok(socket.into())
}

/// Open a tokio socket for one discovery session.
///
/// Must be called from within a tokio runtime.
pub fn open_broadcast_socket(bind_addr: SocketAddr) -> Result<UdpSocket, DiscoveryError> {
    let std_socket = create_broadcast_socket(bind_addr)?;
    UdpSocket::from_std(std_socket).map_err(DiscoveryError::Bind)
}
