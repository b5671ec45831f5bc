//! Datagram channel abstraction used by a discovery session.

use std::io;
use std::net::SocketAddr;

use tokio::net::UdpSocket;

/// Unreliable datagram transport a session sends its probe on and reads
/// replies from.
#[allow(async_fn_in_trait)]
pub trait DatagramChannel {
    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;

    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;
}

impl DatagramChannel for UdpSocket {
    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        UdpSocket::send_to(self, buf, target).await
    }

    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        UdpSocket::recv_from(self, buf).await
    }
}
