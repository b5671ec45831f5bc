//! Shared core library for finding Emby servers on the local network.
//!
//! A single discovery session broadcasts the `who is EmbyServer?` probe,
//! collects JSON replies for a bounded listening window, deduplicates them
//! and hands the final list to the caller exactly once.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    discover, find_servers, find_servers_on, find_servers_with, spawn_find_servers,
    spawn_find_servers_with, DatagramChannel, DiscoveryOptions, DiscoverySession, SessionState,
};
pub use error::{DecodeError, DiscoveryError};
pub use types::{DiscoveryInfo, DiscoveryKey};
