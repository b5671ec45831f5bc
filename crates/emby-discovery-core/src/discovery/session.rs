//! One discovery session: send the probe, collect replies until the
//! listening deadline, finalize.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::net::SocketAddr;

use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, error, info, warn};

use super::channel::DatagramChannel;
use super::options::DiscoveryOptions;
use super::probe::{parse_response, probe_payload};
use crate::error::DiscoveryError;
use crate::types::{DiscoveryInfo, DiscoveryKey};

/// Lifecycle of a discovery session.
///
/// `Idle -> Sending -> Listening -> Completed`, or `Idle -> Sending -> Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
    Listening,
    Completed,
    Failed,
}

/// A single discovery run over a datagram channel.
///
/// The session owns the channel; dropping the session releases it.
pub struct DiscoverySession<C> {
    channel: C,
    options: DiscoveryOptions,
    state: SessionState,
}

impl<C: DatagramChannel> DiscoverySession<C> {
    pub fn new(channel: C, options: DiscoveryOptions) -> Self {
        Self {
            channel,
            options,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Send the probe, listen for the whole window, and return the
    /// deduplicated servers.
    ///
    /// A send failure returns immediately without listening. Once listening
    /// starts the call always succeeds, possibly with an empty list.
    pub async fn run(&mut self) -> Result<Vec<DiscoveryInfo>, DiscoveryError> {
        if self.state != SessionState::Idle {
            return Err(DiscoveryError::AlreadyRun);
        }

        self.send_probe().await?;

        let found = self.collect().await;
        let servers = finalize(found);

        self.transition(SessionState::Completed);
        info!("Found {} server(s)", servers.len());

        Ok(servers)
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "Discovery session state change");
        self.state = next;
    }

    async fn send_probe(&mut self) -> Result<(), DiscoveryError> {
        self.transition(SessionState::Sending);

        let target = self.options.target;
        let send_timeout = self.options.send_timeout;

        let result = match timeout(send_timeout, self.channel.send_to(probe_payload(), target)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(source)) => Err(DiscoveryError::Send { target, source }),
            Err(_) => Err(DiscoveryError::SendTimeout {
                target,
                timeout: send_timeout,
            }),
        };

        match result {
            Ok(()) => {
                info!("Discovery probe sent to {}", target);
                Ok(())
            }
            Err(e) => {
                error!("Error sending discovery probe: {}", e);
                self.transition(SessionState::Failed);
                Err(e)
            }
        }
    }

    /// Receive until the deadline. Nothing is inserted after this returns.
    async fn collect(&mut self) -> HashMap<DiscoveryKey, DiscoveryInfo> {
        self.transition(SessionState::Listening);

        let deadline = Instant::now() + self.options.listen_window;
        let mut found = HashMap::new();
        let mut buf = vec![0u8; self.options.max_datagram_size];

        loop {
            match timeout_at(deadline, self.channel.recv_from(&mut buf)).await {
                Ok(Ok((len, from))) => {
                    if record_response(&mut found, &buf[..len], from) {
                        debug!("{} server(s) so far", found.len());
                    }
                }
                Ok(Err(e)) if is_transient(e.kind()) => {
                    debug!("Transient discovery receive error: {}", e);
                    continue;
                }
                Ok(Err(e)) => {
                    warn!("Discovery receive failed, finishing early: {}", e);
                    break;
                }
                Err(_) => break,
            }
        }

        found
    }
}

/// Receive errors that do not mean the socket is gone. Unconnected UDP
/// sockets on Windows surface ICMP port-unreachable as a connection reset.
fn is_transient(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Interrupted
            | ErrorKind::WouldBlock
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionRefused
    )
}

/// Decode one datagram and insert it. Returns true if it added a new server.
fn record_response(
    found: &mut HashMap<DiscoveryKey, DiscoveryInfo>,
    bytes: &[u8],
    from: SocketAddr,
) -> bool {
    match parse_response(bytes) {
        Ok(info) => {
            let key = info.dedup_key();
            if found.contains_key(&key) {
                debug!("Duplicate discovery response from {}: {}", from, info.address);
                return false;
            }
            info!("New server {} at {} (from {})", info.display_name(), info.address, from);
            found.insert(key, info);
            true
        }
        Err(e) => {
            warn!("Ignoring discovery response from {}: {}", from, e);
            false
        }
    }
}

fn finalize(found: HashMap<DiscoveryKey, DiscoveryInfo>) -> Vec<DiscoveryInfo> {
    let mut servers: Vec<DiscoveryInfo> = found.into_values().collect();
    servers.sort_by(|a, b| a.address.cmp(&b.address).then_with(|| a.id.cmp(&b.id)));
    servers
}
