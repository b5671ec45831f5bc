//! Type definitions for discovered servers.
//!
//! Field names follow the JSON a server sends back in reply to the probe.

use serde::{Deserialize, Serialize};

/// One server's self-reported identity, as decoded from its reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiscoveryInfo {
    /// Advertised server address (usually an http URL)
    #[serde(alias = "address")]
    pub address: String,
    /// Stable server identifier
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address the server sees itself reachable on from the LAN
    #[serde(
        default,
        alias = "endpointAddress",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint_address: Option<String>,
    /// Server version
    #[serde(default, alias = "version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Key used to decide whether two replies describe the same server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscoveryKey {
    /// The server reported a non-empty id
    Id(String),
    /// No id: every field takes part in equality
    Fields(DiscoveryInfo),
}

impl DiscoveryInfo {
    /// Dedup key: the server id when present, the whole record otherwise.
    pub fn dedup_key(&self) -> DiscoveryKey {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => DiscoveryKey::Id(id.to_string()),
            _ => DiscoveryKey::Fields(self.clone()),
        }
    }

    /// Human-readable label: name, then id, then address.
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.id.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(&self.address)
    }
}
