//! JSON-formatted output for CLI.

use chrono::{DateTime, Utc};
use emby_discovery_core::DiscoveryInfo;
use serde::Serialize;
use serde_json::{json, Value};

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn servers_document(servers: &[DiscoveryInfo], scanned_at: DateTime<Utc>) -> Value {
        json!({
            "servers": servers,
            "count": servers.len(),
            "scannedAt": scanned_at.to_rfc3339(),
        })
    }

    /// Single-line document, for newline-delimited streams.
    pub fn format_servers_line(&self, servers: &[DiscoveryInfo], scanned_at: DateTime<Utc>) -> String {
        Self::servers_document(servers, scanned_at).to_string()
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_servers(&self, servers: &[DiscoveryInfo], scanned_at: DateTime<Utc>) -> String {
        Self::to_json(&Self::servers_document(servers, scanned_at))
    }

    fn format_message(&self, message: &str) -> String {
        Self::to_json(&json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_servers() {
        let servers = vec![DiscoveryInfo {
            address: "http://192.168.1.10:8096".to_string(),
            id: Some("abc".to_string()),
            name: Some("Basement".to_string()),
            endpoint_address: None,
            version: None,
        }];
        let scanned_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let output = JsonOutput::new().format_servers(&servers, scanned_at);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["servers"][0]["Address"], "http://192.168.1.10:8096");
        assert_eq!(value["servers"][0]["Name"], "Basement");
        assert!(value["servers"][0].get("EndpointAddress").is_none());
        assert_eq!(value["scannedAt"], "2026-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_format_servers_line_is_single_line() {
        let servers = vec![DiscoveryInfo {
            address: "http://192.168.1.10:8096".to_string(),
            id: None,
            name: None,
            endpoint_address: None,
            version: None,
        }];

        let line = JsonOutput::new().format_servers_line(&servers, Utc::now());
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["servers"][0]["Address"], "http://192.168.1.10:8096");
    }

    #[test]
    fn test_format_empty() {
        let output = JsonOutput::new().format_servers(&[], Utc::now());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value["servers"].as_array().unwrap().is_empty());
    }
}
