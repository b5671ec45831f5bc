//! UDP broadcast discovery of Emby servers.
//!
//! Provides the probe codec, the datagram channel seam, socket setup and
//! the discovery session, plus callback-style entry points.

pub mod channel;
pub mod options;
pub mod probe;
pub mod session;
pub mod socket;

pub use channel::DatagramChannel;
pub use options::DiscoveryOptions;
pub use probe::{parse_response, DISCOVERY_PORT, PROBE_MESSAGE};
pub use session::{DiscoverySession, SessionState};
pub use socket::open_broadcast_socket;

use tokio::task::JoinHandle;
use tracing::error;

use crate::error::DiscoveryError;
use crate::types::DiscoveryInfo;

/// Run one discovery session on a fresh socket and return what it found.
pub async fn discover(options: DiscoveryOptions) -> Result<Vec<DiscoveryInfo>, DiscoveryError> {
    let socket = open_broadcast_socket(options.bind_addr)?;
    let mut session = DiscoverySession::new(socket, options);
    session.run().await
}

/// Find servers, bounding both the probe send and the listening window by
/// `timeout_ms`. Exactly one of the callbacks is invoked, once.
pub async fn find_servers<S, E>(timeout_ms: u64, on_success: S, on_error: E)
where
    S: FnOnce(Vec<DiscoveryInfo>),
    E: FnOnce(DiscoveryError),
{
    find_servers_with(DiscoveryOptions::with_timeout_ms(timeout_ms), on_success, on_error).await
}

/// Like [`find_servers`] with explicit options.
pub async fn find_servers_with<S, E>(options: DiscoveryOptions, on_success: S, on_error: E)
where
    S: FnOnce(Vec<DiscoveryInfo>),
    E: FnOnce(DiscoveryError),
{
    match open_broadcast_socket(options.bind_addr) {
        Ok(socket) => find_servers_on(socket, options, on_success, on_error).await,
        Err(e) => {
            error!("Error opening discovery socket: {}", e);
            on_error(e);
        }
    }
}

/// Run a session over a caller-supplied channel and report through the
/// callbacks. The channel is dropped before either callback runs.
pub async fn find_servers_on<C, S, E>(
    channel: C,
    options: DiscoveryOptions,
    on_success: S,
    on_error: E,
) where
    C: DatagramChannel,
    S: FnOnce(Vec<DiscoveryInfo>),
    E: FnOnce(DiscoveryError),
{
    let mut session = DiscoverySession::new(channel, options);
    let result = session.run().await;
    drop(session);

    match result {
        Ok(servers) => on_success(servers),
        Err(e) => on_error(e),
    }
}

/// Fire-and-forget [`find_servers`] on the current tokio runtime.
pub fn spawn_find_servers<S, E>(timeout_ms: u64, on_success: S, on_error: E) -> JoinHandle<()>
where
    S: FnOnce(Vec<DiscoveryInfo>) + Send + 'static,
    E: FnOnce(DiscoveryError) + Send + 'static,
{
    spawn_find_servers_with(DiscoveryOptions::with_timeout_ms(timeout_ms), on_success, on_error)
}

/// Like [`spawn_find_servers`] with explicit options.
pub fn spawn_find_servers_with<S, E>(
    options: DiscoveryOptions,
    on_success: S,
    on_error: E,
) -> JoinHandle<()>
where
    S: FnOnce(Vec<DiscoveryInfo>) + Send + 'static,
    E: FnOnce(DiscoveryError) + Send + 'static,
{
    tokio::spawn(find_servers_with(options, on_success, on_error))
}
